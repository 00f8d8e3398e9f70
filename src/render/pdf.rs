//! genpdf-backed layout engine.

use std::io::Write;

use genpdf::{elements, style, Element, Margins};

use super::{LayoutEngine, PaperSize, RenderOptions, RoleStyle};
use crate::error::Result;
use crate::model::{Block, Document};
use crate::render::fonts;

/// Layout engine producing PDF output through genpdf.
///
/// Blocks are emitted strictly in order: per block a style lookup by role,
/// one styled paragraph padded with the role's spacing, then a fixed
/// vertical spacer before the next block. Page breaking is left to genpdf's
/// flowing layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfEngine;

impl PdfEngine {
    /// Create a new engine.
    pub fn new() -> Self {
        Self
    }
}

impl LayoutEngine for PdfEngine {
    fn render(
        &self,
        document: &Document,
        options: &RenderOptions,
        sink: &mut dyn Write,
    ) -> Result<()> {
        let family = fonts::load_font_family(
            options.font_dir.as_deref(),
            options.font_family.as_deref(),
        )?;

        let mut doc = genpdf::Document::new(family);
        doc.set_title(document.title().unwrap_or_default());
        doc.set_paper_size(paper_size(options.paper_size));

        let mut decorator = genpdf::SimplePageDecorator::new();
        decorator.set_margins(Margins::trbl(
            options.margin_mm,
            options.margin_mm,
            options.margin_mm,
            options.margin_mm,
        ));
        doc.set_page_decorator(decorator);

        for (index, block) in document.blocks.iter().enumerate() {
            if index > 0 {
                doc.push(elements::Break::new(options.block_gap));
            }
            let role_style = options.styles.for_role(block.role);
            doc.push(block_element(block, role_style));
        }

        log::debug!("rendering {} blocks", document.block_count());
        doc.render(sink)?;
        Ok(())
    }
}

fn paper_size(size: PaperSize) -> genpdf::PaperSize {
    match size {
        PaperSize::A4 => genpdf::PaperSize::A4,
        PaperSize::Letter => genpdf::PaperSize::Letter,
        PaperSize::Legal => genpdf::PaperSize::Legal,
    }
}

fn text_style(role_style: &RoleStyle) -> style::Style {
    let mut s = style::Style::new().with_font_size(role_style.font_size);
    if role_style.bold {
        s = s.bold();
    }
    s
}

/// Build the layout element for one block.
///
/// Embedded line breaks stay explicit: each source line becomes its own
/// paragraph inside a vertical layout, so multi-line content is never
/// joined into one flowed line.
fn block_element(block: &Block, role_style: &RoleStyle) -> impl genpdf::Element {
    let mut layout = elements::LinearLayout::vertical();
    for line in block.text.split('\n') {
        layout.push(elements::Paragraph::new(line).styled(text_style(role_style)));
    }
    layout.padded(Margins::trbl(
        role_style.space_before_mm,
        0.0,
        role_style.space_after_mm,
        0.0,
    ))
}

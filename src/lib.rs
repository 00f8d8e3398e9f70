//! # topdf
//!
//! Convert semi-structured HTML report documents into paginated PDF files.
//!
//! The conversion is a forward-only pipeline: a markup scanner flattens the
//! document into text fragments with paragraph-break markers, a normalizer
//! collapses them into trimmed logical lines, a classifier assigns each line
//! a block role (title, heading, body), and a flowing-layout engine lays the
//! styled blocks onto fixed-geometry pages.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use topdf::{convert_file, ConvertOptions};
//!
//! fn main() -> topdf::Result<()> {
//!     let options = ConvertOptions::full();
//!     let summary = convert_file(
//!         Path::new("docs/report_full_a4.html"),
//!         Path::new("docs/report_full_a4.pdf"),
//!         &options,
//!     )?;
//!     println!("PDF generated: {}", summary.output.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Variants
//!
//! The two built-in profiles mirror the two report scripts this tool
//! replaces: [`ConversionProfile::Basic`] classifies everything after the
//! title as body text, [`ConversionProfile::Full`] additionally detects
//! section headings and breaks after preformatted blocks. Both are plain
//! configuration over the same pipeline.

pub mod classify;
pub mod convert;
pub mod error;
pub mod model;
pub mod normalize;
pub mod render;
pub mod scan;

// Re-export commonly used types
pub use classify::{classify_lines, BlockClassifier, ClassifyOptions, HeadingRules};
pub use convert::{
    convert_file, convert_file_with_engine, derive_output_path, to_document, ConversionProfile,
    ConvertOptions, ConvertSummary,
};
pub use error::{Error, Result};
pub use model::{Block, Document, Metadata, Role};
pub use render::{LayoutEngine, PaperSize, PdfEngine, RenderOptions, RoleStyle, StyleTable};
pub use scan::{Fragment, MarkupScanner, ScanOptions};

use std::path::{Path, PathBuf};

/// Builder for configuring and running conversions.
///
/// # Example
///
/// ```no_run
/// use topdf::Topdf;
///
/// let summary = Topdf::new()
///     .full()
///     .with_font_dir("./fonts")
///     .convert("docs/report_full_a4.html", "docs/report_full_a4.pdf")?;
/// println!("{} blocks", summary.block_count);
/// # Ok::<(), topdf::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Topdf {
    options: ConvertOptions,
}

impl Topdf {
    /// Create a new builder with the basic profile.
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::basic(),
        }
    }

    /// Use the full-document profile.
    pub fn full(mut self) -> Self {
        self.options = ConvertOptions::full();
        self
    }

    /// Use a named profile.
    pub fn with_profile(mut self, profile: ConversionProfile) -> Self {
        self.options = profile.options();
        self
    }

    /// Set the font directory for rendering.
    pub fn with_font_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.render = self.options.render.with_font_dir(dir);
        self
    }

    /// Set the font family base name for rendering.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.options.render = self.options.render.with_font_family(family);
        self
    }

    /// Set the style table.
    pub fn with_styles(mut self, styles: StyleTable) -> Self {
        self.options.render = self.options.render.with_styles(styles);
        self
    }

    /// Get the assembled conversion options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Classify in-memory markup without rendering.
    pub fn classify(&self, html: &str) -> Document {
        to_document(html, &self.options)
    }

    /// Convert an HTML file into a PDF file.
    pub fn convert(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<ConvertSummary> {
        convert_file(input.as_ref(), output.as_ref(), &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_profiles() {
        let basic = Topdf::new();
        assert!(basic.options().classify.heading_rules.is_none());

        let full = Topdf::new().full();
        assert!(full.options().classify.heading_rules.is_some());
    }

    #[test]
    fn test_builder_font_overrides() {
        let builder = Topdf::new()
            .with_font_dir("./fonts")
            .with_font_family("DejaVuSans");
        assert_eq!(
            builder.options().render.font_dir.as_deref(),
            Some(Path::new("./fonts"))
        );
        assert_eq!(
            builder.options().render.font_family.as_deref(),
            Some("DejaVuSans")
        );
    }

    #[test]
    fn test_builder_classify() {
        let doc = Topdf::new()
            .full()
            .classify("<h1>Report</h1><p>Summary:</p>");
        assert_eq!(doc.block_count(), 2);
        assert_eq!(doc.blocks[1].role, Role::Heading);
    }
}

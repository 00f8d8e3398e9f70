//! Rendering options and configuration.

use crate::model::Role;
use std::path::PathBuf;

/// Options for rendering a classified document: page geometry, the style
/// table, and font resolution hints.
///
/// Geometry and styles are fixed for a whole conversion run; there is no
/// per-block override.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Page size, constant for the whole document
    pub paper_size: PaperSize,

    /// Uniform margin on all four sides, in millimetres
    pub margin_mm: f64,

    /// Fixed vertical spacer between consecutive blocks, in line heights
    pub block_gap: f64,

    /// Per-role typographic styles
    pub styles: StyleTable,

    /// Directory to load the TTF font family from (system locations are
    /// searched when unset)
    pub font_dir: Option<PathBuf>,

    /// Font family base name (e.g. "LiberationSans")
    pub font_family: Option<String>,
}

impl RenderOptions {
    /// Create new render options with defaults (the basic style preset).
    pub fn new() -> Self {
        Self::default()
    }

    /// The basic variant's page template.
    pub fn basic() -> Self {
        Self::default()
    }

    /// The full-document variant's page template.
    pub fn full() -> Self {
        Self {
            styles: StyleTable::full(),
            ..Self::default()
        }
    }

    /// Set the paper size.
    pub fn with_paper_size(mut self, size: PaperSize) -> Self {
        self.paper_size = size;
        self
    }

    /// Set the uniform page margin in millimetres.
    pub fn with_margin(mut self, mm: f64) -> Self {
        self.margin_mm = mm;
        self
    }

    /// Set the inter-block spacer height in line heights.
    pub fn with_block_gap(mut self, lines: f64) -> Self {
        self.block_gap = lines;
        self
    }

    /// Set the style table.
    pub fn with_styles(mut self, styles: StyleTable) -> Self {
        self.styles = styles;
        self
    }

    /// Set the font directory.
    pub fn with_font_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.font_dir = Some(dir.into());
        self
    }

    /// Set the font family base name.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            margin_mm: 20.0,
            block_gap: 0.5,
            styles: StyleTable::basic(),
            font_dir: None,
            font_family: None,
        }
    }
}

/// Supported page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaperSize {
    /// ISO A4 (210 x 297 mm)
    #[default]
    A4,
    /// US Letter
    Letter,
    /// US Legal
    Legal,
}

/// Typographic attributes of one block role.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleStyle {
    /// Font size in points
    pub font_size: u8,

    /// Whether the role uses the bold face
    pub bold: bool,

    /// Vertical space before the block, in millimetres
    pub space_before_mm: f64,

    /// Vertical space after the block, in millimetres
    pub space_after_mm: f64,
}

impl RoleStyle {
    /// Create a regular-weight style with no extra spacing.
    pub fn new(font_size: u8) -> Self {
        Self {
            font_size,
            bold: false,
            space_before_mm: 0.0,
            space_after_mm: 0.0,
        }
    }

    /// Use the bold face.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set the space before the block in millimetres.
    pub fn with_space_before(mut self, mm: f64) -> Self {
        self.space_before_mm = mm;
        self
    }

    /// Set the space after the block in millimetres.
    pub fn with_space_after(mut self, mm: f64) -> Self {
        self.space_after_mm = mm;
        self
    }
}

/// Immutable mapping from block role to typographic attributes, defined once
/// per conversion run.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable {
    /// Style of the document title
    pub title: RoleStyle,

    /// Style of section headings
    pub heading: RoleStyle,

    /// Style of body paragraphs
    pub body: RoleStyle,
}

impl StyleTable {
    /// Style preset of the basic variant: a large title over plain body
    /// paragraphs.
    pub fn basic() -> Self {
        Self {
            title: RoleStyle::new(20).bold().with_space_after(3.5),
            heading: RoleStyle::new(14).bold(),
            body: RoleStyle::new(10),
        }
    }

    /// Style preset of the full-document variant, with a distinct section
    /// heading treatment.
    pub fn full() -> Self {
        Self {
            title: RoleStyle::new(18).bold().with_space_after(2.8),
            heading: RoleStyle::new(14)
                .bold()
                .with_space_before(2.8)
                .with_space_after(2.1),
            body: RoleStyle::new(10),
        }
    }

    /// Look up the style for a role.
    pub fn for_role(&self, role: Role) -> &RoleStyle {
        match role {
            Role::Title => &self.title,
            Role::Heading => &self.heading,
            Role::Body => &self.body,
        }
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::basic()
    }
}

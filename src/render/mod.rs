//! Rendering module for laying out classified documents as paginated PDF.

mod engine;
mod fonts;
mod options;
mod pdf;

pub use engine::LayoutEngine;
pub use fonts::load_font_family;
pub use options::{PaperSize, RenderOptions, RoleStyle, StyleTable};
pub use pdf::PdfEngine;

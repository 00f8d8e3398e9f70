//! Layout engine capability interface.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::RenderOptions;
use crate::error::Result;
use crate::model::Document;

/// A flowing-layout engine: lays an ordered sequence of styled blocks onto
/// pages of the given geometry and writes the result as a PDF byte stream.
///
/// Pagination is entirely the engine's concern; callers only guarantee
/// ordered, styled input. Any engine failure propagates unrecovered.
pub trait LayoutEngine {
    /// Lay out the document and write the PDF byte stream to `sink`.
    fn render(
        &self,
        document: &Document,
        options: &RenderOptions,
        sink: &mut dyn Write,
    ) -> Result<()>;

    /// Lay out the document and write the PDF to a file at `path`.
    ///
    /// Both the implicit input handle and the output handle are scoped to
    /// this call and released on every exit path.
    fn render_to_file(
        &self,
        document: &Document,
        options: &RenderOptions,
        path: &Path,
    ) -> Result<()> {
        let file = File::create(path)?;
        let mut sink = BufWriter::new(file);
        self.render(document, options, &mut sink)?;
        sink.flush()?;
        Ok(())
    }
}

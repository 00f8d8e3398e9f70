//! Conversion orchestration.
//!
//! Wires the pipeline stages together: scan → normalize → classify →
//! render. Data flows strictly forward within a single synchronous run; the
//! two conversion variants differ only in the configuration bundled here.

mod profile;

pub use profile::{derive_output_path, ConversionProfile};

use std::fs;
use std::path::{Path, PathBuf};

use crate::classify::{BlockClassifier, ClassifyOptions};
use crate::error::{Error, Result};
use crate::model::Document;
use crate::normalize;
use crate::render::{LayoutEngine, PdfEngine, RenderOptions};
use crate::scan::{MarkupScanner, ScanOptions};

/// Options for a whole conversion run: one config per pipeline stage.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Markup scanning options
    pub scan: ScanOptions,

    /// Block classification options
    pub classify: ClassifyOptions,

    /// Rendering options
    pub render: RenderOptions,
}

impl ConvertOptions {
    /// Create new conversion options with defaults (the basic variant).
    pub fn new() -> Self {
        Self::default()
    }

    /// Options of the basic variant.
    pub fn basic() -> Self {
        Self {
            scan: ScanOptions::basic(),
            classify: ClassifyOptions::basic(),
            render: RenderOptions::basic(),
        }
    }

    /// Options of the full-document variant.
    pub fn full() -> Self {
        Self {
            scan: ScanOptions::extended(),
            classify: ClassifyOptions::extended(),
            render: RenderOptions::full(),
        }
    }

    /// Set the scanning options.
    pub fn with_scan_options(mut self, options: ScanOptions) -> Self {
        self.scan = options;
        self
    }

    /// Set the classification options.
    pub fn with_classify_options(mut self, options: ClassifyOptions) -> Self {
        self.classify = options;
        self
    }

    /// Set the rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }
}

/// Result of a file conversion.
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    /// Path of the produced PDF
    pub output: PathBuf,

    /// Number of blocks laid out
    pub block_count: usize,

    /// Classified document title, if any
    pub title: Option<String>,
}

/// Run the front half of the pipeline on in-memory markup: scan, normalize,
/// classify.
pub fn to_document(html: &str, options: &ConvertOptions) -> Document {
    let fragments = MarkupScanner::new(options.scan.clone()).scan(html);
    let lines = normalize::lines_from_fragments(&fragments);
    let blocks = BlockClassifier::new(options.classify.clone()).classify(lines);
    log::debug!("classified {} blocks", blocks.len());
    Document::from_blocks(blocks)
}

/// Convert an HTML file on disk into a PDF file at `output`.
///
/// If the input does not exist the conversion aborts with
/// [`Error::MissingInput`] before any scanning; no output file is written.
/// Rendering failures propagate unrecovered.
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<ConvertSummary> {
    convert_file_with_engine(input, output, options, &PdfEngine::new())
}

/// Convert an HTML file using a caller-provided layout engine.
pub fn convert_file_with_engine(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
    engine: &dyn LayoutEngine,
) -> Result<ConvertSummary> {
    if !input.exists() {
        return Err(Error::MissingInput(input.to_path_buf()));
    }

    let bytes = fs::read(input)?;
    let html = String::from_utf8(bytes).map_err(|e| Error::Encoding(e.to_string()))?;

    let mut document = to_document(&html, options);
    document.metadata.source = Some(input.to_path_buf());

    engine.render_to_file(&document, &options.render, output)?;
    log::info!(
        "converted {} ({} blocks) -> {}",
        input.display(),
        document.block_count(),
        output.display()
    );

    Ok(ConvertSummary {
        output: output.to_path_buf(),
        block_count: document.block_count(),
        title: document.title().map(str::to_string),
    })
}

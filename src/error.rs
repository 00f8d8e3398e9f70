//! Error types for the topdf library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for topdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input document does not exist on disk.
    ///
    /// Raised before any scanning happens; no output file is written.
    #[error("Input document not found: {0}")]
    MissingInput(PathBuf),

    /// The input file is not valid UTF-8.
    #[error("Input is not valid UTF-8: {0}")]
    Encoding(String),

    /// No usable TTF font family could be located for rendering.
    #[error("Font loading error: {0}")]
    FontLoad(String),

    /// Error raised by the typesetting engine while laying out or
    /// serializing the output document.
    #[error("PDF rendering error: {0}")]
    Render(String),

    /// Error serializing the block sequence to JSON.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<genpdf::error::Error> for Error {
    fn from(err: genpdf::error::Error) -> Self {
        Error::Render(err.to_string())
    }
}

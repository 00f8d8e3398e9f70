//! Document-level types.

use super::{Block, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A classified document, ready for rendering.
///
/// Blocks appear in exactly the order they were classified; the renderer
/// never reorders or merges them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, source, timestamps)
    pub metadata: Metadata,

    /// Classified blocks in source order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            blocks: Vec::new(),
        }
    }

    /// Create a document from a block sequence.
    ///
    /// The metadata title is taken from the first title block, if any.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        let title = blocks
            .iter()
            .find(|b| b.role == Role::Title)
            .map(|b| b.text.clone());
        Self {
            metadata: Metadata {
                title,
                ..Metadata::default()
            },
            blocks,
        }
    }

    /// Get the number of blocks in the document.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the document title, if one was classified.
    pub fn title(&self) -> Option<&str> {
        self.metadata.title.as_deref()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Document metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title (first title block)
    pub title: Option<String>,

    /// Source file the document was scanned from
    pub source: Option<PathBuf>,

    /// Conversion timestamp
    pub created: DateTime<Utc>,

    /// Generator name embedded in the output
    pub generator: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: None,
            source: None,
            created: Utc::now(),
            generator: format!("topdf {}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Metadata {
    /// Set the source path.
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }
}

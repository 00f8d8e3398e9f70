//! Block-level types.

use serde::{Deserialize, Serialize};

/// Typographic role of a block.
///
/// The role determines which entry of the style table is applied when the
/// block is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The document title (always and only the first block).
    Title,
    /// A section heading.
    Heading,
    /// A body paragraph.
    Body,
}

impl Role {
    /// Human-readable role name, as used in the JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Title => "title",
            Role::Heading => "heading",
            Role::Body => "body",
        }
    }
}

/// A classified unit of text, ready for layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Typographic role
    pub role: Role,

    /// Block text (trimmed, non-empty)
    pub text: String,
}

impl Block {
    /// Create a new block.
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    /// Create a title block.
    pub fn title(text: impl Into<String>) -> Self {
        Self::new(Role::Title, text)
    }

    /// Create a heading block.
    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(Role::Heading, text)
    }

    /// Create a body block.
    pub fn body(text: impl Into<String>) -> Self {
        Self::new(Role::Body, text)
    }
}

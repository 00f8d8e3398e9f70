//! Role assignment for logical lines.

use super::ClassifyOptions;
use crate::model::{Block, Role};

/// Classifier assigning a role to each logical line.
#[derive(Debug, Clone, Default)]
pub struct BlockClassifier {
    options: ClassifyOptions,
}

impl BlockClassifier {
    /// Create a classifier with the given rule set.
    pub fn new(options: ClassifyOptions) -> Self {
        Self { options }
    }

    /// Get the classifier's options.
    pub fn options(&self) -> &ClassifyOptions {
        &self.options
    }

    /// Classify an ordered line sequence into an ordered block sequence of
    /// equal length.
    ///
    /// The positional title rule is checked first and only applies to the
    /// first line; every other line goes through the heading rules (if any)
    /// and falls back to body.
    pub fn classify<I, S>(&self, lines: I) -> Vec<Block>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| {
                let text = line.into();
                let role = self.role_for(index, &text);
                Block::new(role, text)
            })
            .collect()
    }

    fn role_for(&self, index: usize, line: &str) -> Role {
        if index == 0 {
            return Role::Title;
        }
        match self.options.heading_rules {
            Some(ref rules) if rules.matches(line) => Role::Heading,
            _ => Role::Body,
        }
    }
}

/// Classify a line sequence with the given options.
pub fn classify_lines<I, S>(lines: I, options: &ClassifyOptions) -> Vec<Block>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    BlockClassifier::new(options.clone()).classify(lines)
}

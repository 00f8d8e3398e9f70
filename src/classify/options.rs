//! Classification options and configuration.

use regex::Regex;

/// Options for classifying logical lines into blocks.
///
/// The first line of a document is always the title; the rule set only
/// governs how the remaining lines are split between headings and body
/// paragraphs. With `heading_rules` unset (the basic variant), every line
/// after the first is a body paragraph.
#[derive(Debug, Clone, Default)]
pub struct ClassifyOptions {
    /// Heading detection rules; `None` disables heading detection entirely
    pub heading_rules: Option<HeadingRules>,
}

impl ClassifyOptions {
    /// Create new classify options with defaults (the basic variant).
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules of the basic variant: title, then body paragraphs only.
    pub fn basic() -> Self {
        Self {
            heading_rules: None,
        }
    }

    /// Rules of the extended variant, with the report heading heuristics
    /// enabled.
    pub fn extended() -> Self {
        Self {
            heading_rules: Some(HeadingRules::report()),
        }
    }

    /// Set the heading detection rules.
    pub fn with_heading_rules(mut self, rules: HeadingRules) -> Self {
        self.heading_rules = Some(rules);
        self
    }
}

/// Heading detection rules.
///
/// These heuristics are deliberately permissive: a body sentence ending in a
/// colon is misclassified as a heading, and that is accepted as cosmetic.
/// The flattened text stream carries no structural information to validate
/// against, so the rules are preserved as-is rather than refined.
#[derive(Debug, Clone)]
pub struct HeadingRules {
    /// Treat a line ending with a colon as a heading
    pub colon_suffix: bool,

    /// Anchored, case-insensitive pattern matched against the start of the
    /// line
    pub prefix_pattern: Option<Regex>,
}

impl HeadingRules {
    /// The report heuristics: colon suffix, numbered first section, table of
    /// contents, and introduction prefixes (the source documents are French).
    pub fn report() -> Self {
        Self {
            colon_suffix: true,
            prefix_pattern: Some(
                Regex::new(r"(?i)^(?:1\.|table des matières|introduction)").unwrap(),
            ),
        }
    }

    /// Check whether a line matches the heading rules. Rules are evaluated
    /// in order; the first match wins.
    pub fn matches(&self, line: &str) -> bool {
        if self.colon_suffix && line.ends_with(':') {
            return true;
        }
        if let Some(ref pattern) = self.prefix_pattern {
            return pattern.is_match(line);
        }
        false
    }
}

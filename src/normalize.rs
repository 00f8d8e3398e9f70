//! Line normalization.
//!
//! Collapses the scanner's fragment stream into logical lines: paragraph
//! breaks become newlines, each resulting segment is trimmed, and segments
//! that are empty after trimming are dropped. Relative order is preserved
//! exactly.

use crate::scan::Fragment;

/// Render a fragment stream as flat text with paragraph breaks as newlines.
pub fn collapse(fragments: &[Fragment]) -> String {
    let mut text = String::new();
    for fragment in fragments {
        match fragment {
            Fragment::Text(s) => text.push_str(s),
            Fragment::ParagraphBreak => text.push('\n'),
        }
    }
    text
}

/// Split flat text into trimmed, non-empty logical lines.
pub fn logical_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize a fragment stream directly into logical lines.
pub fn lines_from_fragments(fragments: &[Fragment]) -> Vec<String> {
    logical_lines(&collapse(fragments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_renders_breaks_as_newlines() {
        let fragments = vec![
            Fragment::Text("one".into()),
            Fragment::ParagraphBreak,
            Fragment::Text("two".into()),
        ];
        assert_eq!(collapse(&fragments), "one\ntwo");
    }

    #[test]
    fn test_logical_lines_trim_and_drop() {
        let lines = logical_lines("  first  \n\n   \n\tsecond\n");
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_logical_lines_never_empty_or_padded() {
        let lines = logical_lines("a\n  b  \n \n\nc");
        for line in &lines {
            assert!(!line.is_empty());
            assert_eq!(line.trim(), line);
        }
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_order_preserved() {
        let lines = logical_lines("3\n1\n2");
        assert_eq!(lines, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_whitespace_only_input_yields_no_lines() {
        let fragments = vec![
            Fragment::Text("   ".into()),
            Fragment::ParagraphBreak,
            Fragment::Text("\n\t".into()),
        ];
        assert!(lines_from_fragments(&fragments).is_empty());
    }
}

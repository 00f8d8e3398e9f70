//! Event-driven markup scanner.
//!
//! Streams an HTML document as a flat token sequence (open tag, text, close
//! tag) and emits text fragments interleaved with paragraph-break markers at
//! the structural boundaries configured in [`ScanOptions`]. Malformed markup
//! is tolerated: end-name checking is disabled, so unclosed elements and
//! stray closers pass through without error.

use quick_xml::events::Event;
use quick_xml::Reader;

use super::ScanOptions;

/// A unit of the scanner's output stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Literal text content between tags, internal whitespace preserved
    Text(String),
    /// A paragraph boundary
    ParagraphBreak,
}

impl Fragment {
    /// Get the text content, if this is a text fragment.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Fragment::Text(s) => Some(s),
            Fragment::ParagraphBreak => None,
        }
    }
}

/// Scanner producing an ordered fragment stream from markup text.
#[derive(Debug, Clone)]
pub struct MarkupScanner {
    options: ScanOptions,
}

impl MarkupScanner {
    /// Create a scanner with the given break rules.
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Get the scanner's options.
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scan a markup document into an ordered fragment stream.
    ///
    /// Never fails: a tokenizer error is logged and ends the scan with the
    /// fragments collected so far.
    pub fn scan(&self, html: &str) -> Vec<Fragment> {
        let mut reader = Reader::from_str(html);
        reader.check_end_names(false);

        let mut fragments = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    let name = e.name();
                    let tag = String::from_utf8_lossy(name.as_ref());
                    if self.options.breaks_before(&tag) {
                        fragments.push(Fragment::ParagraphBreak);
                    }
                }
                Ok(Event::End(e)) => {
                    let name = e.name();
                    let tag = String::from_utf8_lossy(name.as_ref());
                    // A tag that opens a new paragraph also terminates its
                    // own when it closes; heading text never joins the text
                    // that follows it.
                    if self.options.breaks_after(&tag) || self.options.breaks_before(&tag) {
                        fragments.push(Fragment::ParagraphBreak);
                    }
                }
                // An empty element fires both the open and close behavior.
                Ok(Event::Empty(e)) => {
                    let name = e.name();
                    let tag = String::from_utf8_lossy(name.as_ref());
                    if self.options.breaks_before(&tag) {
                        fragments.push(Fragment::ParagraphBreak);
                    }
                    if self.options.breaks_after(&tag) || self.options.breaks_before(&tag) {
                        fragments.push(Fragment::ParagraphBreak);
                    }
                }
                Ok(Event::Text(t)) => {
                    let text = match t.unescape_with(resolve_html_entity) {
                        Ok(cow) => cow.into_owned(),
                        // Unknown entity: keep the raw source text.
                        Err(_) => String::from_utf8_lossy(t.as_ref()).into_owned(),
                    };
                    if !text.is_empty() {
                        fragments.push(Fragment::Text(text));
                    }
                }
                Ok(Event::CData(t)) => {
                    let text = String::from_utf8_lossy(&t.into_inner()).into_owned();
                    if !text.is_empty() {
                        fragments.push(Fragment::Text(text));
                    }
                }
                Ok(Event::Comment(_))
                | Ok(Event::Decl(_))
                | Ok(Event::PI(_))
                | Ok(Event::DocType(_)) => {}
                Ok(Event::Eof) => break,
                Err(e) => {
                    log::warn!("markup tokenizer error, stopping scan: {}", e);
                    break;
                }
            }
        }

        log::debug!("scanned {} fragments", fragments.len());
        fragments
    }
}

impl Default for MarkupScanner {
    fn default() -> Self {
        Self::new(ScanOptions::default())
    }
}

/// Resolve HTML named character references that are not part of the XML
/// predefined set. Covers the entities that actually occur in the report
/// documents; anything else falls back to the raw source text.
fn resolve_html_entity(name: &str) -> Option<&'static str> {
    match name {
        "nbsp" => Some("\u{00a0}"),
        "copy" => Some("\u{00a9}"),
        "laquo" => Some("\u{00ab}"),
        "raquo" => Some("\u{00bb}"),
        "agrave" => Some("\u{00e0}"),
        "ccedil" => Some("\u{00e7}"),
        "eacute" => Some("\u{00e9}"),
        "egrave" => Some("\u{00e8}"),
        "ecirc" => Some("\u{00ea}"),
        "ocirc" => Some("\u{00f4}"),
        "ugrave" => Some("\u{00f9}"),
        "ndash" => Some("\u{2013}"),
        "mdash" => Some("\u{2014}"),
        "lsquo" => Some("\u{2018}"),
        "rsquo" => Some("\u{2019}"),
        "ldquo" => Some("\u{201c}"),
        "rdquo" => Some("\u{201d}"),
        "hellip" => Some("\u{2026}"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(fragments: &[Fragment]) -> Vec<&str> {
        fragments.iter().filter_map(|f| f.as_text()).collect()
    }

    #[test]
    fn test_scan_headings_isolated_by_breaks() {
        let scanner = MarkupScanner::default();
        let fragments = scanner.scan("<h1>Report</h1>intro");

        assert_eq!(
            fragments,
            vec![
                Fragment::ParagraphBreak,
                Fragment::Text("Report".into()),
                Fragment::ParagraphBreak,
                Fragment::Text("intro".into()),
            ]
        );
    }

    #[test]
    fn test_scan_blocks_break_after() {
        let scanner = MarkupScanner::default();
        let fragments = scanner.scan("<p>one</p><p>two</p>");

        assert_eq!(
            fragments,
            vec![
                Fragment::Text("one".into()),
                Fragment::ParagraphBreak,
                Fragment::Text("two".into()),
                Fragment::ParagraphBreak,
            ]
        );
    }

    #[test]
    fn test_scan_preserves_internal_whitespace() {
        let scanner = MarkupScanner::default();
        let fragments = scanner.scan("<p>a  b</p>");
        assert_eq!(texts(&fragments), vec!["a  b"]);
    }

    #[test]
    fn test_scan_nested_containers() {
        let scanner = MarkupScanner::default();
        let fragments = scanner.scan("<div>Line one</div><div>Line two</div>");

        assert_eq!(
            fragments,
            vec![
                Fragment::Text("Line one".into()),
                Fragment::ParagraphBreak,
                Fragment::Text("Line two".into()),
                Fragment::ParagraphBreak,
            ]
        );
    }

    #[test]
    fn test_scan_pre_only_breaks_in_extended() {
        let html = "<pre>code</pre>after";

        let basic = MarkupScanner::new(ScanOptions::basic()).scan(html);
        assert!(!basic.contains(&Fragment::ParagraphBreak));

        let extended = MarkupScanner::new(ScanOptions::extended()).scan(html);
        assert_eq!(
            extended,
            vec![
                Fragment::Text("code".into()),
                Fragment::ParagraphBreak,
                Fragment::Text("after".into()),
            ]
        );
    }

    #[test]
    fn test_scan_tolerates_unbalanced_markup() {
        let scanner = MarkupScanner::default();
        // Stray closer and an unclosed element: no panic, closer still breaks.
        let fragments = scanner.scan("<div>open</p><h2>title");

        assert_eq!(
            fragments,
            vec![
                Fragment::Text("open".into()),
                Fragment::ParagraphBreak,
                Fragment::ParagraphBreak,
                Fragment::Text("title".into()),
            ]
        );
    }

    #[test]
    fn test_scan_empty_element_fires_both_rules() {
        let options = ScanOptions::new()
            .with_break_before(["div"])
            .with_break_after(["div"]);
        let fragments = MarkupScanner::new(options).scan("a<div/>b");

        assert_eq!(
            fragments,
            vec![
                Fragment::Text("a".into()),
                Fragment::ParagraphBreak,
                Fragment::ParagraphBreak,
                Fragment::Text("b".into()),
            ]
        );
    }

    #[test]
    fn test_scan_resolves_entities() {
        let scanner = MarkupScanner::default();
        let fragments = scanner.scan("<p>Table des mati&egrave;res&nbsp;:</p>");
        assert_eq!(texts(&fragments), vec!["Table des matières\u{00a0}:"]);
    }

    #[test]
    fn test_scan_uppercase_tags() {
        let scanner = MarkupScanner::default();
        let fragments = scanner.scan("<DIV>shouty</DIV>");
        assert_eq!(
            fragments,
            vec![
                Fragment::Text("shouty".into()),
                Fragment::ParagraphBreak,
            ]
        );
    }

    #[test]
    fn test_scan_skips_comments_and_doctype() {
        let scanner = MarkupScanner::default();
        let fragments = scanner.scan("<!DOCTYPE html><!-- note --><p>body</p>");
        assert_eq!(texts(&fragments), vec!["body"]);
    }
}

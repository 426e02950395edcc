//! Inline markdown parser.
//!
//! Recognizes bold emphasis (`**text**`) and links (`[label](url)`). The two
//! are layered: emphasis is found first, and only the text between emphasis
//! spans is searched for links. Nothing nests.

use mdadf_core::InlineRun;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for bold: **text** (non-greedy, single line)
static STRONG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// Regex for links: [label](url)
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Parse a text fragment into inline runs.
///
/// The runs cover the fragment left to right. A fragment without markup,
/// including the empty fragment, yields a single plain run.
///
/// # Example
///
/// ```
/// use mdadf_core::InlineRun;
/// use mdadf_parser::parse_inline;
///
/// let runs = parse_inline("**bold** and [link](http://x)");
/// assert_eq!(
///     runs,
///     vec![
///         InlineRun::strong("bold"),
///         InlineRun::plain(" and "),
///         InlineRun::link("link", "http://x"),
///     ]
/// );
/// ```
pub fn parse_inline(text: &str) -> Vec<InlineRun> {
    let mut runs = Vec::new();
    let mut last = 0;

    for caps in STRONG_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            runs.extend(parse_links(&text[last..whole.start()]));
        }
        let inner = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        runs.push(InlineRun::strong(inner));
        last = whole.end();
    }

    if last < text.len() {
        runs.extend(parse_links(&text[last..]));
    }

    if runs.is_empty() {
        runs.push(InlineRun::plain(text));
    }
    runs
}

/// Split a fragment into link and plain runs.
fn parse_links(text: &str) -> Vec<InlineRun> {
    let mut runs = Vec::new();
    let mut last = 0;

    for caps in LINK_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            runs.push(InlineRun::plain(&text[last..whole.start()]));
        }
        let label = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let href = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        runs.push(InlineRun::link(label, href));
        last = whole.end();
    }

    if last < text.len() {
        runs.push(InlineRun::plain(&text[last..]));
    }

    if runs.is_empty() {
        runs.push(InlineRun::plain(text));
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(parse_inline("just words"), vec![InlineRun::plain("just words")]);
    }

    #[test]
    fn test_empty_fragment_yields_one_run() {
        assert_eq!(parse_inline(""), vec![InlineRun::plain("")]);
    }

    #[test]
    fn test_bold_then_link() {
        assert_eq!(
            parse_inline("**bold** and [link](http://x)"),
            vec![
                InlineRun::strong("bold"),
                InlineRun::plain(" and "),
                InlineRun::link("link", "http://x"),
            ]
        );
    }

    #[test]
    fn test_multiple_bold_spans() {
        assert_eq!(
            parse_inline("a **b** c **d**"),
            vec![
                InlineRun::plain("a "),
                InlineRun::strong("b"),
                InlineRun::plain(" c "),
                InlineRun::strong("d"),
            ]
        );
    }

    #[test]
    fn test_bold_is_non_greedy() {
        assert_eq!(
            parse_inline("**a** x **b**"),
            vec![
                InlineRun::strong("a"),
                InlineRun::plain(" x "),
                InlineRun::strong("b"),
            ]
        );
    }

    #[test]
    fn test_link_between_text() {
        assert_eq!(
            parse_inline("see [docs](https://example.com/a) now"),
            vec![
                InlineRun::plain("see "),
                InlineRun::link("docs", "https://example.com/a"),
                InlineRun::plain(" now"),
            ]
        );
    }

    #[test]
    fn test_adjacent_links() {
        assert_eq!(
            parse_inline("[a](1)[b](2)"),
            vec![InlineRun::link("a", "1"), InlineRun::link("b", "2")]
        );
    }

    #[test]
    fn test_link_inside_bold_stays_literal() {
        assert_eq!(
            parse_inline("**[a](b)**"),
            vec![InlineRun::strong("[a](b)")]
        );
    }

    #[test]
    fn test_bold_inside_link_label_is_not_styled() {
        // Emphasis runs first and splits the link apart.
        assert_eq!(
            parse_inline("[**x**](u)"),
            vec![
                InlineRun::plain("["),
                InlineRun::strong("x"),
                InlineRun::plain("](u)"),
            ]
        );
    }

    #[test]
    fn test_unclosed_markup_is_plain() {
        assert_eq!(parse_inline("**open"), vec![InlineRun::plain("**open")]);
        assert_eq!(parse_inline("[label](url"), vec![InlineRun::plain("[label](url")]);
        assert_eq!(parse_inline("****"), vec![InlineRun::plain("****")]);
    }

    #[test]
    fn test_bold_does_not_span_lines() {
        assert_eq!(
            parse_inline("**a\nb**"),
            vec![InlineRun::plain("**a\nb**")]
        );
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(
            parse_inline("café **naïve** 日本"),
            vec![
                InlineRun::plain("café "),
                InlineRun::strong("naïve"),
                InlineRun::plain(" 日本"),
            ]
        );
    }
}

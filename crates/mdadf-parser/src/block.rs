//! Block classifier and node builder.
//!
//! Each line is classified on its trimmed form, first match wins:
//! heading, code fence, bullet item, ordered item, table row, block quote,
//! blank, text. Text lines accumulate into a paragraph that is flushed by a
//! blank line, by the start of any other block, or by the end of input.

use crate::inline::parse_inline;
use crate::lines::LineCursor;
use log::{debug, trace};
use mdadf_core::{
    BlockNode, Blockquote, CodeBlock, ConvertOptions, Heading, List, Paragraph, Table, TableAttrs,
};
use regex::Regex;
use std::sync::LazyLock;

// =============================================================================
// Regex patterns
// =============================================================================

/// Regex for headings. Any number of hashes; the level is clamped later.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#+)\s+(.+)$").unwrap());

/// Regex for bullet list markers: -, *, +
static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*+]\s+").unwrap());

/// Regex for ordered list markers: 1., 2., ...
static ORDERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+").unwrap());

/// Code fence marker.
const FENCE: &str = "```";

/// Marks a table separator row.
const TABLE_SEPARATOR: &str = "---";

/// Fewest contiguous pipe lines that form a table: header, separator, one row.
const MIN_TABLE_LINES: usize = 3;

// =============================================================================
// Line classification
// =============================================================================

/// What a single line starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `# Title`
    Heading { level: usize, text: &'a str },
    /// Opening code fence with its (possibly empty) language tag
    Fence { language: &'a str },
    /// `- item`, `* item`, `+ item`
    BulletItem,
    /// `1. item`
    OrderedItem,
    /// Any line containing a pipe
    TableRow,
    /// `> quote`
    Quote { text: &'a str },
    /// Whitespace only
    Blank,
    /// Paragraph text
    Text,
}

/// Classify one line.
pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    if let Some(caps) = HEADING_RE.captures(trimmed) {
        let level = caps.get(1).map(|m| m.as_str().len()).unwrap_or(1);
        let text = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        return LineKind::Heading { level, text };
    }

    if let Some(tag) = trimmed.strip_prefix(FENCE) {
        return LineKind::Fence {
            language: tag.trim(),
        };
    }

    if BULLET_RE.is_match(trimmed) {
        return LineKind::BulletItem;
    }

    if ORDERED_RE.is_match(trimmed) {
        return LineKind::OrderedItem;
    }

    if line.contains('|') {
        return LineKind::TableRow;
    }

    if let Some(text) = trimmed.strip_prefix('>') {
        return LineKind::Quote { text: text.trim() };
    }

    if trimmed.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Text
    }
}

fn is_fence(line: &str) -> bool {
    line.trim().starts_with(FENCE)
}

fn is_bullet(line: &str) -> bool {
    BULLET_RE.is_match(line.trim())
}

fn is_ordered(line: &str) -> bool {
    ORDERED_RE.is_match(line.trim())
}

/// Text of a list item with its marker removed.
fn strip_marker(re: &Regex, line: &str) -> String {
    re.replace(line.trim(), "").into_owned()
}

/// Build a paragraph from a text fragment.
pub fn paragraph(text: &str) -> Paragraph {
    Paragraph::new(parse_inline(text))
}

// =============================================================================
// Block parser
// =============================================================================

/// Turns lines into block nodes.
#[derive(Debug, Clone, Default)]
pub struct BlockParser {
    options: ConvertOptions,
}

impl BlockParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Consume every remaining line of `cursor` and return the blocks found.
    pub fn parse(&self, cursor: &mut LineCursor<'_>) -> Vec<BlockNode> {
        let mut blocks = Vec::new();
        let mut pending: Vec<&str> = Vec::new();

        while let Some(line) = cursor.peek() {
            let kind = classify(line);
            trace!("line {}: {:?}", cursor.position(), kind);

            match kind {
                LineKind::Text => {
                    cursor.next_line();
                    pending.push(line);
                    continue;
                }
                LineKind::Blank => {
                    cursor.next_line();
                    flush_paragraph(&mut pending, &mut blocks);
                    continue;
                }
                _ => flush_paragraph(&mut pending, &mut blocks),
            }

            let node = match kind {
                LineKind::Heading { level, text } => {
                    cursor.next_line();
                    Some(BlockNode::Heading(Heading::new(level, parse_inline(text))))
                }
                LineKind::Fence { language } => self.code_block(cursor, language),
                LineKind::BulletItem => {
                    let items = cursor.consume_while(is_bullet);
                    Some(BlockNode::BulletList(List::new(
                        items.iter().map(|l| paragraph(&strip_marker(&BULLET_RE, l))),
                    )))
                }
                LineKind::OrderedItem => {
                    let items = cursor.consume_while(is_ordered);
                    Some(BlockNode::OrderedList(List::new(
                        items.iter().map(|l| paragraph(&strip_marker(&ORDERED_RE, l))),
                    )))
                }
                LineKind::TableRow => {
                    let start = cursor.position();
                    let rows = cursor.consume_while(|l| l.contains('|'));
                    if rows.len() < MIN_TABLE_LINES {
                        debug!(
                            "dropping {} pipe line(s) at line {}: too few for a table",
                            rows.len(),
                            start
                        );
                        None
                    } else {
                        Some(self.table(&rows))
                    }
                }
                LineKind::Quote { text } => {
                    cursor.next_line();
                    Some(BlockNode::Blockquote(Blockquote::new(paragraph(text))))
                }
                LineKind::Text | LineKind::Blank => None,
            };

            if let Some(node) = node {
                blocks.push(node);
            }
        }

        flush_paragraph(&mut pending, &mut blocks);
        blocks
    }

    /// Collect a fenced code block. The opening fence is the current line.
    fn code_block(&self, cursor: &mut LineCursor<'_>, language: &str) -> Option<BlockNode> {
        let start = cursor.position();
        cursor.next_line();
        let code = cursor.consume_while(|l| !is_fence(l));
        if cursor.next_line().is_none() {
            debug!("unterminated code fence at line {}", start);
        }

        if code.is_empty() {
            debug!("skipping empty code block at line {}", start);
            return None;
        }

        Some(BlockNode::CodeBlock(CodeBlock::new(
            self.options.code_language(language),
            code.join("\n"),
        )))
    }

    /// Build a table from at least three pipe lines.
    fn table(&self, lines: &[&str]) -> BlockNode {
        let rows: Vec<Vec<Paragraph>> = lines
            .iter()
            .filter(|l| !l.contains(TABLE_SEPARATOR))
            .map(|l| split_cells(l).into_iter().map(paragraph).collect())
            .collect();

        match rows.split_first() {
            Some((header, body)) if !body.is_empty() => BlockNode::Table(Table::new(
                TableAttrs::from(&self.options),
                header.clone(),
                body.to_vec(),
            )),
            _ => {
                debug!("table has no data rows after removing separators");
                BlockNode::Paragraph(Paragraph::empty())
            }
        }
    }
}

/// Split a row on pipes, dropping empty cells.
fn split_cells(line: &str) -> Vec<&str> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect()
}

/// Emit the buffered text lines as one paragraph.
fn flush_paragraph(pending: &mut Vec<&str>, blocks: &mut Vec<BlockNode>) {
    if pending.is_empty() {
        return;
    }
    let text = pending.join("\n");
    let text = text.trim();
    if !text.is_empty() {
        blocks.push(BlockNode::Paragraph(paragraph(text)));
    }
    pending.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdadf_core::{BlockKind, InlineRun};

    fn parse(input: &str) -> Vec<BlockNode> {
        BlockParser::new().parse(&mut LineCursor::new(input))
    }

    fn kinds(blocks: &[BlockNode]) -> Vec<BlockKind> {
        blocks.iter().map(BlockNode::kind).collect()
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            classify("# Title"),
            LineKind::Heading {
                level: 1,
                text: "Title"
            }
        );
        assert_eq!(classify("```rust"), LineKind::Fence { language: "rust" });
        assert_eq!(classify("```"), LineKind::Fence { language: "" });
        assert_eq!(classify("- item"), LineKind::BulletItem);
        assert_eq!(classify("  * item"), LineKind::BulletItem);
        assert_eq!(classify("+ item"), LineKind::BulletItem);
        assert_eq!(classify("12. item"), LineKind::OrderedItem);
        assert_eq!(classify("a | b"), LineKind::TableRow);
        assert_eq!(classify("> quoted"), LineKind::Quote { text: "quoted" });
        assert_eq!(classify("   "), LineKind::Blank);
        assert_eq!(classify("words"), LineKind::Text);
    }

    #[test]
    fn test_classify_precedence() {
        // Heading wins over a pipe.
        assert!(matches!(classify("# a | b"), LineKind::Heading { .. }));
        // A pipe wins over a quote marker.
        assert_eq!(classify("> a | b"), LineKind::TableRow);
        // Bold text is not a bullet.
        assert_eq!(classify("**bold** start"), LineKind::Text);
        // A dash rule is not a bullet.
        assert_eq!(classify("---"), LineKind::Text);
        // Hash without a space is not a heading.
        assert_eq!(classify("#tag"), LineKind::Text);
    }

    #[test]
    fn test_heading_levels() {
        let blocks = parse("# One\n###### Six\n######## Eight");
        let levels: Vec<u8> = blocks
            .iter()
            .map(|b| match b {
                BlockNode::Heading(h) => h.level(),
                _ => 0,
            })
            .collect();
        assert_eq!(levels, vec![1, 6, 6]);
    }

    #[test]
    fn test_paragraph_accumulation() {
        let blocks = parse("line one\nline two\n\nnext");
        assert_eq!(kinds(&blocks), vec![BlockKind::Paragraph, BlockKind::Paragraph]);
        match &blocks[0] {
            BlockNode::Paragraph(p) => assert_eq!(p.text(), "line one\nline two"),
            other => panic!("unexpected {:?}", other.kind()),
        }
    }

    #[test]
    fn test_paragraph_flushed_by_block_start() {
        let blocks = parse("intro\n# Heading\noutro");
        assert_eq!(
            kinds(&blocks),
            vec![BlockKind::Paragraph, BlockKind::Heading, BlockKind::Paragraph]
        );
    }

    #[test]
    fn test_code_block_consumes_closing_fence() {
        let blocks = parse("```rust\nfn main() {}\n    indented\n```\nafter");
        assert_eq!(kinds(&blocks), vec![BlockKind::CodeBlock, BlockKind::Paragraph]);
        match &blocks[0] {
            BlockNode::CodeBlock(c) => {
                assert_eq!(c.language(), "rust");
                assert_eq!(c.code(), "fn main() {}\n    indented");
            }
            other => panic!("unexpected {:?}", other.kind()),
        }
    }

    #[test]
    fn test_code_block_keeps_markdown_verbatim() {
        let blocks = parse("```\n# not a heading\n- not a list\n```");
        assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            BlockNode::CodeBlock(c) => {
                assert_eq!(c.language(), "plain");
                assert_eq!(c.code(), "# not a heading\n- not a list");
            }
            other => panic!("unexpected {:?}", other.kind()),
        }
    }

    #[test]
    fn test_unterminated_code_block() {
        let blocks = parse("```sh\necho hi\n\n# still code");
        assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            BlockNode::CodeBlock(c) => assert_eq!(c.code(), "echo hi\n\n# still code"),
            other => panic!("unexpected {:?}", other.kind()),
        }
    }

    #[test]
    fn test_empty_code_block_dropped() {
        assert!(parse("```\n```").is_empty());
    }

    #[test]
    fn test_custom_code_language() {
        let parser = BlockParser::with_options(ConvertOptions::default().with_code_language("text"));
        let blocks = parser.parse(&mut LineCursor::new("```\nx\n```"));
        match &blocks[0] {
            BlockNode::CodeBlock(c) => assert_eq!(c.language(), "text"),
            other => panic!("unexpected {:?}", other.kind()),
        }
    }

    #[test]
    fn test_bullet_list_collects_siblings_once() {
        let blocks = parse("- a\n* b\n+ **c**\ntext");
        assert_eq!(kinds(&blocks), vec![BlockKind::BulletList, BlockKind::Paragraph]);
        match &blocks[0] {
            BlockNode::BulletList(list) => {
                let texts: Vec<String> = list.items().iter().map(|i| i.text()).collect();
                assert_eq!(texts, vec!["a", "b", "c"]);
                assert_eq!(
                    list.items()[2].content[0].paragraph().content,
                    vec![InlineRun::strong("c")]
                );
            }
            other => panic!("unexpected {:?}", other.kind()),
        }
    }

    #[test]
    fn test_ordered_list_drops_numbers() {
        let blocks = parse("3. third\n10. tenth");
        match &blocks[0] {
            BlockNode::OrderedList(list) => {
                let texts: Vec<String> = list.items().iter().map(|i| i.text()).collect();
                assert_eq!(texts, vec!["third", "tenth"]);
            }
            other => panic!("unexpected {:?}", other.kind()),
        }
    }

    #[test]
    fn test_bullet_then_ordered_are_separate_lists() {
        let blocks = parse("- a\n1. b");
        assert_eq!(kinds(&blocks), vec![BlockKind::BulletList, BlockKind::OrderedList]);
    }

    #[test]
    fn test_table() {
        let blocks = parse("a|b\n---|---\n1|2");
        assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            BlockNode::Table(table) => {
                assert_eq!(table.rows().len(), 2);
                assert_eq!(table.rows()[0].texts(), vec!["a", "b"]);
                assert!(table.rows()[0].content.iter().all(|c| c.is_header()));
                assert_eq!(table.rows()[1].texts(), vec!["1", "2"]);
                assert!(table.rows()[1].content.iter().all(|c| !c.is_header()));
                assert_eq!(table.attrs.layout, "default");
                assert!(!table.attrs.is_number_column_enabled);
            }
            other => panic!("unexpected {:?}", other.kind()),
        }
    }

    #[test]
    fn test_table_with_outer_pipes() {
        let blocks = parse("| Name | Role |\n|------|------|\n| Ana | **Dev** |\n| Bo | QA |");
        match &blocks[0] {
            BlockNode::Table(table) => {
                assert_eq!(table.rows().len(), 3);
                assert_eq!(table.rows()[0].texts(), vec!["Name", "Role"]);
                assert_eq!(table.rows()[2].texts(), vec!["Bo", "QA"]);
            }
            other => panic!("unexpected {:?}", other.kind()),
        }
    }

    #[test]
    fn test_short_table_dropped() {
        assert!(parse("a|b\n---|---").is_empty());
        assert!(parse("just | one").is_empty());
        let blocks = parse("before\n\na|b\n---|---\n\nafter");
        assert_eq!(kinds(&blocks), vec![BlockKind::Paragraph, BlockKind::Paragraph]);
    }

    #[test]
    fn test_table_without_data_rows_is_empty_paragraph() {
        let blocks = parse("a|b\n---|---\n---|---");
        assert_eq!(blocks, vec![BlockNode::Paragraph(Paragraph::empty())]);
    }

    #[test]
    fn test_blockquote_single_line_each() {
        let blocks = parse("> first\n> second\ncontinued");
        assert_eq!(
            kinds(&blocks),
            vec![BlockKind::Blockquote, BlockKind::Blockquote, BlockKind::Paragraph]
        );
        match &blocks[1] {
            BlockNode::Blockquote(q) => assert_eq!(q.text(), "second"),
            other => panic!("unexpected {:?}", other.kind()),
        }
    }

    #[test]
    fn test_blank_lines_emit_nothing() {
        assert!(parse("\n\n   \n").is_empty());
    }
}

//! The converted document tree.
//!
//! Every type here serializes to the Atlassian Document Format (ADF) JSON
//! consumed by the Confluence v2 page API. Node kinds are closed sum types,
//! so a document can only hold the shapes listed in [`BlockNode`].

use crate::enums::{BlockKind, TextStyle};
use crate::options::ConvertOptions;
use serde::{Deserialize, Serialize};

/// ADF format version written into every document envelope.
pub const ADF_VERSION: u32 = 1;

// =============================================================================
// Envelope
// =============================================================================

/// Root of a converted document.
///
/// A document always holds at least one block and carries [`ADF_VERSION`];
/// deserializing JSON that breaks either rule fails.
///
/// # Example
///
/// ```
/// use mdadf_core::Document;
///
/// let doc = Document::new(Vec::new());
/// assert_eq!(doc.version(), 1);
/// assert_eq!(doc.blocks().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "doc", try_from = "RawDocument")]
pub struct Document {
    version: u32,
    content: Vec<BlockNode>,
}

/// Unchecked wire form of a [`Document`].
#[derive(Deserialize)]
#[serde(tag = "type", rename = "doc")]
struct RawDocument {
    version: u32,
    content: Vec<BlockNode>,
}

impl TryFrom<RawDocument> for Document {
    type Error = String;

    fn try_from(raw: RawDocument) -> std::result::Result<Self, Self::Error> {
        if raw.version != ADF_VERSION {
            return Err(format!("unsupported ADF version {}", raw.version));
        }
        if raw.content.is_empty() {
            return Err("document has no content".to_string());
        }
        Ok(Self {
            version: raw.version,
            content: raw.content,
        })
    }
}

impl Document {
    /// Wrap blocks in a versioned envelope, inserting an empty paragraph when
    /// there are none.
    pub fn new(mut blocks: Vec<BlockNode>) -> Self {
        if blocks.is_empty() {
            blocks.push(BlockNode::Paragraph(Paragraph::empty()));
        }
        Self {
            version: ADF_VERSION,
            content: blocks,
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn blocks(&self) -> &[BlockNode] {
        &self.content
    }

    pub fn into_blocks(self) -> Vec<BlockNode> {
        self.content
    }

    /// Serialize to compact ADF JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented ADF JSON.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// =============================================================================
// Block nodes
// =============================================================================

/// A block-level node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BlockNode {
    Paragraph(Paragraph),
    Heading(Heading),
    CodeBlock(CodeBlock),
    BulletList(List),
    OrderedList(List),
    Table(Table),
    Blockquote(Blockquote),
}

impl BlockNode {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockNode::Paragraph(_) => BlockKind::Paragraph,
            BlockNode::Heading(_) => BlockKind::Heading,
            BlockNode::CodeBlock(_) => BlockKind::CodeBlock,
            BlockNode::BulletList(_) => BlockKind::BulletList,
            BlockNode::OrderedList(_) => BlockKind::OrderedList,
            BlockNode::Table(_) => BlockKind::Table,
            BlockNode::Blockquote(_) => BlockKind::Blockquote,
        }
    }
}

/// A paragraph of inline runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub content: Vec<InlineRun>,
}

impl Paragraph {
    pub fn new(content: Vec<InlineRun>) -> Self {
        Self { content }
    }

    /// Paragraph holding a single empty text run.
    pub fn empty() -> Self {
        Self::new(vec![InlineRun::plain("")])
    }

    /// Concatenated text of all runs, marks dropped.
    pub fn text(&self) -> String {
        self.content.iter().map(InlineRun::text).collect()
    }
}

/// Heading level attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingAttrs {
    pub level: u8,
}

/// A heading with a level from 1 to 6.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHeading")]
pub struct Heading {
    attrs: HeadingAttrs,
    pub content: Vec<InlineRun>,
}

#[derive(Deserialize)]
struct RawHeading {
    attrs: HeadingAttrs,
    content: Vec<InlineRun>,
}

impl TryFrom<RawHeading> for Heading {
    type Error = String;

    fn try_from(raw: RawHeading) -> std::result::Result<Self, Self::Error> {
        if !(1..=6).contains(&raw.attrs.level) {
            return Err(format!("heading level {} out of range", raw.attrs.level));
        }
        Ok(Self {
            attrs: raw.attrs,
            content: raw.content,
        })
    }
}

impl Heading {
    /// Build a heading; the level is clamped into 1..=6.
    pub fn new(level: usize, content: Vec<InlineRun>) -> Self {
        Self {
            attrs: HeadingAttrs {
                level: level.clamp(1, 6) as u8,
            },
            content,
        }
    }

    pub fn level(&self) -> u8 {
        self.attrs.level
    }
}

/// Code block language attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlockAttrs {
    pub language: String,
}

/// A fenced code block. The code is kept verbatim in one plain run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    attrs: CodeBlockAttrs,
    content: Vec<InlineRun>,
}

impl CodeBlock {
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            attrs: CodeBlockAttrs {
                language: language.into(),
            },
            content: vec![InlineRun::plain(code)],
        }
    }

    pub fn language(&self) -> &str {
        &self.attrs.language
    }

    pub fn code(&self) -> String {
        self.content.iter().map(InlineRun::text).collect()
    }
}

/// Block wrapped by list items, table cells and block quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ItemBlock {
    Paragraph(Paragraph),
}

impl ItemBlock {
    pub fn paragraph(&self) -> &Paragraph {
        match self {
            ItemBlock::Paragraph(p) => p,
        }
    }
}

/// A bullet or ordered list. Which one is decided by the [`BlockNode`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub content: Vec<ListItem>,
}

impl List {
    pub fn new(items: impl IntoIterator<Item = Paragraph>) -> Self {
        Self {
            content: items.into_iter().map(ListItem::new).collect(),
        }
    }

    pub fn items(&self) -> &[ListItem] {
        &self.content
    }
}

/// A list item wrapping one paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "listItem")]
pub struct ListItem {
    pub content: Vec<ItemBlock>,
}

impl ListItem {
    pub fn new(paragraph: Paragraph) -> Self {
        Self {
            content: vec![ItemBlock::Paragraph(paragraph)],
        }
    }

    /// Concatenated text of the wrapped paragraphs.
    pub fn text(&self) -> String {
        self.content.iter().map(|b| b.paragraph().text()).collect()
    }
}

/// Attributes written on every table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableAttrs {
    pub is_number_column_enabled: bool,
    pub layout: String,
}

impl From<&ConvertOptions> for TableAttrs {
    fn from(options: &ConvertOptions) -> Self {
        Self {
            is_number_column_enabled: options.table_number_column,
            layout: options.table_layout.clone(),
        }
    }
}

/// A table. The first row holds header cells, the rest hold data cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub attrs: TableAttrs,
    pub content: Vec<TableRow>,
}

impl Table {
    pub fn new(attrs: TableAttrs, header: Vec<Paragraph>, body: Vec<Vec<Paragraph>>) -> Self {
        let mut rows = Vec::with_capacity(body.len() + 1);
        rows.push(TableRow {
            content: header.into_iter().map(TableCell::header).collect(),
        });
        rows.extend(body.into_iter().map(|row| TableRow {
            content: row.into_iter().map(TableCell::data).collect(),
        }));
        Self {
            attrs,
            content: rows,
        }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.content
    }
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "tableRow")]
pub struct TableRow {
    pub content: Vec<TableCell>,
}

impl TableRow {
    /// Text of each cell, in order.
    pub fn texts(&self) -> Vec<String> {
        self.content.iter().map(TableCell::text).collect()
    }
}

/// A header or data cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TableCell {
    #[serde(rename = "tableHeader")]
    Header(CellContent),
    #[serde(rename = "tableCell")]
    Data(CellContent),
}

impl TableCell {
    pub fn header(paragraph: Paragraph) -> Self {
        TableCell::Header(CellContent::new(paragraph))
    }

    pub fn data(paragraph: Paragraph) -> Self {
        TableCell::Data(CellContent::new(paragraph))
    }

    pub fn is_header(&self) -> bool {
        matches!(self, TableCell::Header(_))
    }

    pub fn text(&self) -> String {
        let (TableCell::Header(cell) | TableCell::Data(cell)) = self;
        cell.content.iter().map(|b| b.paragraph().text()).collect()
    }
}

/// Blocks held by a table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellContent {
    pub content: Vec<ItemBlock>,
}

impl CellContent {
    pub fn new(paragraph: Paragraph) -> Self {
        Self {
            content: vec![ItemBlock::Paragraph(paragraph)],
        }
    }
}

/// A block quote wrapping one paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blockquote {
    pub content: Vec<ItemBlock>,
}

impl Blockquote {
    pub fn new(paragraph: Paragraph) -> Self {
        Self {
            content: vec![ItemBlock::Paragraph(paragraph)],
        }
    }

    pub fn text(&self) -> String {
        self.content.iter().map(|b| b.paragraph().text()).collect()
    }
}

// =============================================================================
// Inline runs
// =============================================================================

/// A span of text with uniform styling.
///
/// Serialized as an ADF `text` node; the variant decides the `marks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "TextNode", try_from = "TextNode")]
pub enum InlineRun {
    /// Unstyled text
    Plain(String),
    /// Text with a style mark
    Styled { text: String, style: TextStyle },
    /// Hyperlinked text
    Link { text: String, href: String },
}

impl InlineRun {
    pub fn plain(text: impl Into<String>) -> Self {
        InlineRun::Plain(text.into())
    }

    pub fn strong(text: impl Into<String>) -> Self {
        InlineRun::Styled {
            text: text.into(),
            style: TextStyle::Strong,
        }
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        InlineRun::Link {
            text: text.into(),
            href: href.into(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            InlineRun::Plain(text)
            | InlineRun::Styled { text, .. }
            | InlineRun::Link { text, .. } => text,
        }
    }

    pub fn marks(&self) -> Vec<Mark> {
        match self {
            InlineRun::Plain(_) => Vec::new(),
            InlineRun::Styled { style, .. } => vec![Mark::from(*style)],
            InlineRun::Link { href, .. } => vec![Mark::Link {
                attrs: LinkAttrs { href: href.clone() },
            }],
        }
    }
}

/// Wire form of an [`InlineRun`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "text")]
pub struct TextNode {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

impl From<InlineRun> for TextNode {
    fn from(run: InlineRun) -> Self {
        let marks = run.marks();
        let text = match run {
            InlineRun::Plain(text)
            | InlineRun::Styled { text, .. }
            | InlineRun::Link { text, .. } => text,
        };
        TextNode { text, marks }
    }
}

impl TryFrom<TextNode> for InlineRun {
    type Error = String;

    fn try_from(node: TextNode) -> std::result::Result<Self, Self::Error> {
        let TextNode { text, marks } = node;
        match marks.as_slice() {
            [] => Ok(InlineRun::Plain(text)),
            [Mark::Strong] => Ok(InlineRun::strong(text)),
            [Mark::Link { attrs }] => Ok(InlineRun::link(text, attrs.href.clone())),
            _ => Err(format!(
                "unsupported marks on text node {:?}: {} marks",
                text,
                marks.len()
            )),
        }
    }
}

/// Formatting mark on a text node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mark {
    Strong,
    Link { attrs: LinkAttrs },
}

impl From<TextStyle> for Mark {
    fn from(style: TextStyle) -> Self {
        match style {
            TextStyle::Strong => Mark::Strong,
        }
    }
}

/// Link target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkAttrs {
    pub href: String,
}

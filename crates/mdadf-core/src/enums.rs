//! Core enums for mdadf documents.
//!
//! These name the kinds of nodes a converted document can hold, using the
//! discriminator strings of the Atlassian Document Format.

use serde::{Deserialize, Serialize};

/// The kind of a block-level node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    /// Plain paragraph of inline runs
    Paragraph,
    /// Heading with a level from 1 to 6
    Heading,
    /// Fenced code block
    CodeBlock,
    /// Unordered list (-, *, +)
    BulletList,
    /// Ordered list (1., 2., etc.)
    OrderedList,
    /// Pipe-delimited table
    Table,
    /// Block quote (> prefix)
    Blockquote,
}

impl BlockKind {
    /// The ADF `type` discriminator for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading => "heading",
            BlockKind::CodeBlock => "codeBlock",
            BlockKind::BulletList => "bulletList",
            BlockKind::OrderedList => "orderedList",
            BlockKind::Table => "table",
            BlockKind::Blockquote => "blockquote",
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Style applied to a styled text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextStyle {
    /// Bold emphasis (**text**)
    Strong,
}

impl std::fmt::Display for TextStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextStyle::Strong => write!(f, "strong"),
        }
    }
}

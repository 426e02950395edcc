//! mdadf Parser
//!
//! Converts Markdown text into an Atlassian Document Format tree in a single
//! top-to-bottom pass.
//!
//! # Overview
//!
//! Conversion happens in three layers:
//! - [`LineCursor`] walks the input lines forward, with lookahead for
//!   multi-line blocks
//! - [`BlockParser`] classifies lines and builds headings, code blocks,
//!   lists, tables, block quotes and paragraphs
//! - [`parse_inline`] splits leaf text into plain, bold and link runs
//!
//! The supported subset is deliberately small. Markup the parser does not
//! recognize is kept as plain text; it never fails.
//!
//! # Example
//!
//! ```
//! use mdadf_core::BlockNode;
//! use mdadf_parser::markdown_to_adf;
//!
//! let doc = markdown_to_adf("# Hello World");
//! match &doc.blocks()[0] {
//!     BlockNode::Heading(h) => assert_eq!(h.level(), 1),
//!     _ => unreachable!(),
//! }
//! ```

pub mod block;
pub mod inline;
pub mod lines;

pub use block::{classify, BlockParser, LineKind};
pub use inline::parse_inline;
pub use lines::LineCursor;

use log::debug;
use mdadf_core::{ConvertOptions, Document};

/// Markdown to ADF converter.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    blocks: BlockParser,
}

impl Converter {
    /// Create a converter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConvertOptions) -> Self {
        Self {
            blocks: BlockParser::with_options(options),
        }
    }

    pub fn options(&self) -> &ConvertOptions {
        self.blocks.options()
    }

    /// Convert a complete Markdown document.
    pub fn convert(&self, markdown: &str) -> Document {
        let mut cursor = LineCursor::new(markdown);
        let blocks = self.blocks.parse(&mut cursor);
        debug!(
            "converted {} line(s) into {} block(s)",
            cursor.len(),
            blocks.len()
        );
        Document::new(blocks)
    }
}

/// Convert Markdown with default options.
pub fn markdown_to_adf(markdown: &str) -> Document {
    Converter::new().convert(markdown)
}

// =============================================================================
// Tests
// =============================================================================

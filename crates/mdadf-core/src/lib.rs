//! mdadf Core
//!
//! This crate provides the document model, options and error definitions
//! for the mdadf Markdown to ADF converter.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Document`], [`BlockNode`], [`InlineRun`] - The converted document tree
//! - [`BlockKind`], [`TextStyle`] - Node kind enums
//! - [`ConvertOptions`] - Settings that shape code blocks and tables
//! - [`PageRequest`] - Confluence v2 page bodies carrying a document
//! - [`AdfError`] - Error types

pub mod document;
pub mod enums;
pub mod error;
pub mod options;
pub mod page;

pub use document::{
    Blockquote, BlockNode, CellContent, CodeBlock, Document, Heading, InlineRun, ItemBlock, List,
    ListItem, Mark, Paragraph, Table, TableAttrs, TableCell, TableRow, TextNode, ADF_VERSION,
};
pub use enums::{BlockKind, TextStyle};
pub use error::{AdfError, Result};
pub use options::ConvertOptions;
pub use page::{PageBody, PageRequest, PageVersion};

//! Options controlling how Markdown is converted.

use serde::{Deserialize, Serialize};

/// Language tag used when a code fence names none.
pub const DEFAULT_CODE_LANGUAGE: &str = "plain";

/// Table layout written to every table node.
pub const DEFAULT_TABLE_LAYOUT: &str = "default";

/// Conversion settings.
///
/// The defaults produce the same output as a bare [`Default`] converter, so
/// callers only need this to change how code blocks and tables are tagged.
///
/// # Example
///
/// ```
/// use mdadf_core::ConvertOptions;
///
/// let options = ConvertOptions::default().with_code_language("text");
/// assert_eq!(options.default_code_language, "text");
/// assert_eq!(options.table_layout, "default");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Language for code blocks whose fence has no tag
    pub default_code_language: String,
    /// Value of the table `isNumberColumnEnabled` attribute
    pub table_number_column: bool,
    /// Value of the table `layout` attribute
    pub table_layout: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            default_code_language: DEFAULT_CODE_LANGUAGE.to_string(),
            table_number_column: false,
            table_layout: DEFAULT_TABLE_LAYOUT.to_string(),
        }
    }
}

impl ConvertOptions {
    /// Replace the default code block language.
    pub fn with_code_language(mut self, language: impl Into<String>) -> Self {
        self.default_code_language = language.into();
        self
    }

    /// Resolve the language for a fence tag, falling back to the default.
    pub fn code_language<'a>(&'a self, tag: &'a str) -> &'a str {
        if tag.is_empty() {
            &self.default_code_language
        } else {
            tag
        }
    }
}

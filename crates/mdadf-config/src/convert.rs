//! Conversion settings.
//!
//! This module contains the `ConvertConfig` struct which controls how code
//! blocks and tables are tagged in the converted document.

use mdadf_core::options::{DEFAULT_CODE_LANGUAGE, DEFAULT_TABLE_LAYOUT};
use mdadf_core::ConvertOptions;
use serde::{Deserialize, Serialize};

/// Conversion settings, the `[convert]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConvertConfig {
    /// Language for code fences without a tag.
    /// Default: "plain"
    #[serde(default = "default_code_language")]
    pub code_language: String,

    /// Enable the numbered first column on tables.
    /// Default: false
    #[serde(default)]
    pub number_column: bool,

    /// Table layout attribute ("default", "wide", "full-width").
    /// Default: "default"
    #[serde(default = "default_table_layout")]
    pub table_layout: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            code_language: default_code_language(),
            number_column: false,
            table_layout: default_table_layout(),
        }
    }
}

impl ConvertConfig {
    /// Options handed to the converter.
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions {
            default_code_language: self.code_language.clone(),
            table_number_column: self.number_column,
            table_layout: self.table_layout.clone(),
        }
    }
}

fn default_code_language() -> String {
    DEFAULT_CODE_LANGUAGE.to_string()
}

fn default_table_layout() -> String {
    DEFAULT_TABLE_LAYOUT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_converter_defaults() {
        assert_eq!(ConvertConfig::default().options(), ConvertOptions::default());
    }

    #[test]
    fn test_serde_pascal_case() {
        let toml_str = r#"
            CodeLanguage = "text"
            NumberColumn = true
            TableLayout = "wide"
        "#;

        let convert: ConvertConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(convert.code_language, "text");
        assert!(convert.number_column);
        assert_eq!(convert.table_layout, "wide");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let convert: ConvertConfig = toml::from_str("NumberColumn = true").unwrap();
        assert_eq!(convert.code_language, "plain");
        assert_eq!(convert.table_layout, "default");
    }
}

//! Output settings, the `[output]` section.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputConfig {
    /// Indent the JSON output.
    /// Default: true
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert!(OutputConfig::default().pretty);
        let parsed: OutputConfig = toml::from_str("").unwrap();
        assert!(parsed.pretty);
    }

    #[test]
    fn test_serde_pascal_case() {
        let parsed: OutputConfig = toml::from_str("Pretty = false").unwrap();
        assert!(!parsed.pretty);
    }
}

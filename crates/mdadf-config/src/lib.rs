//! mdadf Config
//!
//! This crate handles configuration loading and management
//! for mdadf, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/mdadf/config.toml`
//! - macOS: `~/Library/Application Support/mdadf/config.toml`
//! - Windows: `%APPDATA%\mdadf\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use mdadf_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod convert;
mod output;

pub use convert::ConvertConfig;
pub use output::OutputConfig;

use mdadf_core::{AdfError, ConvertOptions, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[convert]
CodeLanguage = "plain"
NumberColumn = false
TableLayout  = "default"

[output]
Pretty = true
"#;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Conversion settings
    #[serde(default)]
    pub convert: ConvertConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use mdadf_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[convert]"));
    /// assert!(toml.contains("[output]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "mdadf")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| AdfError::Config("Could not determine config directory".into()))?;

        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| AdfError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Parse a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| AdfError::Config(format!("Parse error: {}", e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If an override is given:
    ///    - If it names an existing file, read it
    ///    - Otherwise, treat it as inline TOML
    ///
    ///    and apply the keys it sets over the base config
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mdadf_config::Config;
    ///
    /// let config = Config::load_with_override(Some("[convert]\nCodeLanguage = \"text\"")).unwrap();
    /// assert_eq!(config.convert.code_language, "text");
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;
        if let Some(override_str) = override_config {
            config.apply_override(override_str)?;
        }
        Ok(config)
    }

    /// Apply an override given as a file path or inline TOML.
    ///
    /// Only the keys present in the override change; everything else keeps
    /// its current value.
    ///
    /// # Example
    ///
    /// ```
    /// use mdadf_config::Config;
    ///
    /// let mut config = Config::parse("[convert]\nCodeLanguage = \"text\"").unwrap();
    /// config.apply_override("[output]\nPretty = false").unwrap();
    ///
    /// assert!(!config.output.pretty);
    /// assert_eq!(config.convert.code_language, "text");
    /// ```
    pub fn apply_override(&mut self, override_str: &str) -> Result<()> {
        let override_path = Path::new(override_str);
        let overrides = if override_path.is_file() {
            let content = std::fs::read_to_string(override_path)?;
            parse_table(&content).map_err(|e| {
                AdfError::Config(format!("Parse error in {}: {}", override_path.display(), e))
            })?
        } else {
            parse_table(override_str)
                .map_err(|e| AdfError::Config(format!("Override parse error: {}", e)))?
        };
        self.merge(overrides)
    }

    /// Merge raw TOML keys into this config.
    ///
    /// Tables merge key by key, any other value replaces the current one.
    pub fn merge(&mut self, overrides: toml::Table) -> Result<()> {
        let mut merged = match toml::Value::try_from(&*self) {
            Ok(toml::Value::Table(table)) => table,
            Ok(_) => return Err(AdfError::Config("Config is not a table".into())),
            Err(e) => return Err(AdfError::Config(format!("Serialization error: {}", e))),
        };
        merge_tables(&mut merged, overrides);
        *self = toml::Value::Table(merged)
            .try_into()
            .map_err(|e| AdfError::Config(format!("Override error: {}", e)))?;
        Ok(())
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| AdfError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Converter options described by this config.
    ///
    /// # Example
    ///
    /// ```
    /// use mdadf_config::Config;
    /// let options = Config::default().convert_options();
    /// assert_eq!(options.default_code_language, "plain");
    /// ```
    pub fn convert_options(&self) -> ConvertOptions {
        self.convert.options()
    }
}

fn parse_table(content: &str) -> std::result::Result<toml::Table, toml::de::Error> {
    toml::from_str(content)
}

fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        if let toml::Value::Table(section) = value {
            if let Some(toml::Value::Table(base_section)) = base.get_mut(&key) {
                merge_tables(base_section, section);
                continue;
            }
            base.insert(key, toml::Value::Table(section));
        } else {
            base.insert(key, value);
        }
    }
}

//! Error types for mdadf

use thiserror::Error;

/// Main error type for mdadf operations.
///
/// Conversion itself never fails; these cover the surfaces around it.
#[derive(Error, Debug)]
pub enum AdfError {
    /// IO error while reading input or config files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Invalid combination of command line arguments
    #[error("Usage error: {0}")]
    Usage(String),
}

/// Result type alias for mdadf operations
pub type Result<T> = std::result::Result<T, AdfError>;

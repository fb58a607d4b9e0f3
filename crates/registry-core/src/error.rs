//! Error types for registry extraction

use thiserror::Error;

/// Main error type for registry operations.
///
/// Per-field parse failures are never errors; they surface as absent
/// values on the extracted record.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

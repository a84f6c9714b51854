//! Error types for metabase-ir
//!
//! Traversal and type resolution never fail: anomalies degrade to unknown
//! markers or skipped declarations. These errors only surface at the I/O
//! boundary (reading an AST dump, loading config, writing the document).

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for metabase-ir operations
#[derive(Debug, Error)]
pub enum MetabaseError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// AST dump or document (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input tree is structurally unusable (e.g. root is not a translation unit)
    #[error("Invalid AST input: {0}")]
    InvalidInput(String),
}

impl MetabaseError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        MetabaseError::InvalidInput(msg.into())
    }
}

/// Result type alias for metabase operations
pub type Result<T> = std::result::Result<T, MetabaseError>;

//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Minimum OS version is not a dotted numeric version
    #[error("Invalid minimum version '{0}'. Expected a dotted numeric version such as '9.0' or '12.4.1'.")]
    InvalidVersion(String),

    /// Framework filter must be a bare framework name
    #[error("Invalid framework filter '{0}'. Use the framework name without path or '.framework' suffix (e.g. 'UIKit').")]
    InvalidFrameworkFilter(String),

    /// Missing version field in YAML
    #[error("Missing 'version' field in configuration file. Add 'version: 1' to the top of your YAML file.")]
    MissingVersion,

    /// Unsupported version
    #[error("Unsupported configuration version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

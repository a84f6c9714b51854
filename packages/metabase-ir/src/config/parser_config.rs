//! Parser session configuration
//!
//! Holds the five invocation parameters that drive one traversal:
//! SDK root, minimum OS version, system API exclusion, single-framework
//! filter and the name of the framework being generated.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use crate::shared::utils::version::parse_version;

/// Immutable session configuration for one parse invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// SDK root; headers below it are classified as system headers
    pub sdk_path: String,

    /// Minimum target OS version (dotted numeric)
    pub min_version: String,

    /// Drop every declaration located under `sdk_path`
    pub exclude_system_apis: bool,

    /// Only register declarations from this framework (empty = unfiltered)
    pub framework_filter: String,

    /// Framework being generated; never reported as its own dependency
    pub framework_name: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            sdk_path: String::new(),
            min_version: "9.0".to_string(),
            exclude_system_apis: false,
            framework_filter: String::new(),
            framework_name: String::new(),
        }
    }
}

impl ParserConfig {
    pub fn new(sdk_path: impl Into<String>, min_version: impl Into<String>) -> Self {
        Self {
            sdk_path: sdk_path.into(),
            min_version: min_version.into(),
            ..Self::default()
        }
    }

    pub fn exclude_system_apis(mut self, exclude: bool) -> Self {
        self.exclude_system_apis = exclude;
        self
    }

    pub fn framework_filter(mut self, filter: impl Into<String>) -> Self {
        self.framework_filter = filter.into();
        self
    }

    pub fn framework_name(mut self, name: impl Into<String>) -> Self {
        self.framework_name = name.into();
        self
    }

    /// True when only one framework's declarations are registered
    pub fn filter_to_single_framework(&self) -> bool {
        !self.framework_filter.is_empty()
    }

    /// Validate field contents
    pub fn validate(&self) -> ConfigResult<()> {
        if parse_version(&self.min_version).is_none() {
            return Err(ConfigError::InvalidVersion(self.min_version.clone()));
        }

        let filter = &self.framework_filter;
        if filter.contains('/') || filter.ends_with(".framework") {
            return Err(ConfigError::InvalidFrameworkFilter(filter.clone()));
        }

        Ok(())
    }

    /// Load and validate a YAML config file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML config content
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        match file.version {
            None => return Err(ConfigError::MissingVersion),
            Some(1) => {}
            Some(found) => {
                return Err(ConfigError::UnsupportedVersion {
                    found,
                    supported: vec![1],
                })
            }
        }

        let config = file.apply(Self::default());
        config.validate()?;
        Ok(config)
    }

    /// Export as YAML (schema v1)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            sdk_path: Some(self.sdk_path.clone()),
            min_version: Some(self.min_version.clone()),
            exclude_system_apis: Some(self.exclude_system_apis),
            framework_filter: Some(self.framework_filter.clone()),
            framework_name: Some(self.framework_name.clone()),
        };
        Ok(serde_yaml::to_string(&file)?)
    }
}

/// YAML schema v1. Every field except `version` is optional and falls back
/// to the default (or to the command line, when used by the CLI).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    pub version: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdk_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_system_apis: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework_filter: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework_name: Option<String>,
}

impl ConfigFileV1 {
    /// Overlay the fields present in the file onto `base`
    pub fn apply(self, mut base: ParserConfig) -> ParserConfig {
        if let Some(sdk_path) = self.sdk_path {
            base.sdk_path = sdk_path;
        }
        if let Some(min_version) = self.min_version {
            base.min_version = min_version;
        }
        if let Some(exclude) = self.exclude_system_apis {
            base.exclude_system_apis = exclude;
        }
        if let Some(filter) = self.framework_filter {
            base.framework_filter = filter;
        }
        if let Some(name) = self.framework_name {
            base.framework_name = name;
        }
        base
    }
}

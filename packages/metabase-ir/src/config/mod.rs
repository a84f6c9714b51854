//! Session configuration
//!
//! One [`ParserConfig`] is fixed per invocation and handed to the
//! [`ParserContext`](crate::pipeline::ParserContext). It can be built in code
//! or loaded from a versioned YAML file:
//!
//! ```yaml
//! version: 1
//! sdk_path: /Applications/Xcode.app/.../iPhoneSimulator.sdk
//! min_version: "9.0"
//! exclude_system_apis: true
//! framework_filter: MyKit
//! framework_name: MyKit
//! ```

pub mod error;
pub mod parser_config;

pub use error::{ConfigError, ConfigResult};
pub use parser_config::{ConfigFileV1, ParserConfig};

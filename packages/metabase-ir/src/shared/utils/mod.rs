//! Shared utilities

pub mod naming;
pub mod version;

pub use naming::{aggregate_name, is_anonymous_name, selector_to_name};
pub use version::{compare_versions, parse_version};

//! Common test utilities for metabase-ir
//!
//! Shared fixtures, builders and assertions for the integration tests.

#![allow(dead_code)]

mod builders;
mod fixtures;

// Re-export all utilities
pub use assertions::*;
pub use builders::*;
pub use fixtures::*;

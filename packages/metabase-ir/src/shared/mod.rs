//! Shared module - Common types and utilities
//!
//! Types used by every feature: classified source locations, the resolved
//! type triple and small string/version helpers.

#[macro_use]
pub mod macros;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use models::*;

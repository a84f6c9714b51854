//! Feature modules
//!
//! - `parsing` - external syntax tree model
//! - `type_resolution` - encoding grammar and type resolver
//! - `definitions` - per-declaration definition records
//! - `registry` - ParserTree

pub mod definitions;
pub mod parsing;
pub mod registry;
pub mod type_resolution;

//! Registry Feature
//!
//! ## Structure
//! - `named_map` - NamedMap (hash index + ordered entries)
//! - `tree` - ParserTree, BlockMap

pub mod named_map;
pub mod tree;

pub use named_map::NamedMap;
pub use tree::{BlockMap, ParserTree};

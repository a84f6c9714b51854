//! Pipeline
//!
//! AST dump → [`parse`] → [`ParserContext`] → [`MetabaseDocument`].

pub mod context;
pub mod document;
pub mod driver;
pub mod input;

pub use context::{framework_from_path, ParserContext};
pub use document::{MetabaseDocument, Metadata, API_VERSION};
pub use driver::parse;
pub use input::{read_tree, tree_from_reader, tree_from_str};

//! Shared models

mod location;
mod type_info;

pub use location::{LocationKind, SourceLocation};
pub use type_info::{Type, UNKNOWN_ENCODING, UNKNOWN_TYPE};

//! Parsing Feature
//!
//! The syntax front end is an external collaborator. This feature only
//! defines the read-only tree it hands over: cursors (declarations and
//! references) carrying type handles.
//!
//! ## Structure
//! - `domain/` - CursorNode, TypeHandle models

pub mod domain;

// Re-exports
pub use domain::{
    Availability, Callable, CallableKind, CursorKind, CursorLocation, CursorNode, FieldHandle,
    TypeHandle, TypeKind,
};

//! Parsing domain models

pub mod cursor;
pub mod type_handle;

pub use cursor::{Availability, CursorKind, CursorLocation, CursorNode};
pub use type_handle::{Callable, CallableKind, FieldHandle, TypeHandle, TypeKind};

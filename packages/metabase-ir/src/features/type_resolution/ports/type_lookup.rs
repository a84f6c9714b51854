//! Registry lookups the resolver falls back to when a handle is incomplete

use crate::features::type_resolution::domain::AggregateKind;
use crate::shared::models::Type;

/// Read-only view of already registered declarations
pub trait TypeLookup {
    /// Member encodings of a registered struct/union, in field order
    fn aggregate_members(&self, kind: AggregateKind, name: &str) -> Option<Vec<String>>;

    /// Resolved type of a registered typedef
    fn typedef_type(&self, name: &str) -> Option<Type>;
}

/// Lookup with nothing registered
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLookup;

impl TypeLookup for NoLookup {
    fn aggregate_members(&self, _kind: AggregateKind, _name: &str) -> Option<Vec<String>> {
        None
    }

    fn typedef_type(&self, _name: &str) -> Option<Type> {
        None
    }
}

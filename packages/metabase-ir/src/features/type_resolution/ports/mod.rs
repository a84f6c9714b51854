//! Type resolution ports

mod type_lookup;

pub use type_lookup::{NoLookup, TypeLookup};

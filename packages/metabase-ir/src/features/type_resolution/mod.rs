//! Type Resolution Feature
//!
//! Turns type handles and raw runtime encodings into `{type, value, encoding}`
//! triples.
//!
//! ## Structure
//! - `domain/` - encoding grammar, aggregate kinds
//! - `ports/` - TypeLookup (registry fallback)
//! - `infrastructure/` - TypeResolver

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::AggregateKind;
pub use infrastructure::TypeResolver;
pub use ports::{NoLookup, TypeLookup};

//! Definitions Feature
//!
//! One record per declaration kind. Each record builds itself from its own
//! cursor subtree, resolving member types through the parser context, and
//! serializes itself into a document fragment.
//!
//! ## Structure
//! - `base` - DefinitionBase, DefinitionKind
//! - `class` - classes, extensions (categories), protocols
//! - `method`, `member`, `signature` - methods, properties, ivars, arguments
//! - `aggregate`, `enum_def`, `var`, `function`, `typedef`, `block`

pub mod aggregate;
pub mod base;
pub mod block;
pub mod class;
pub mod enum_def;
pub mod function;
pub mod member;
pub mod method;
pub mod signature;
pub mod typedef;
pub mod var;

pub use aggregate::{AggregateDefinition, Field};
pub use base::{DefinitionBase, DefinitionKind};
pub use block::BlockDefinition;
pub use class::ClassDefinition;
pub use enum_def::{EnumCase, EnumDefinition};
pub use function::FunctionDefinition;
pub use member::{IvarDefinition, PropertyDefinition};
pub use method::MethodDefinition;
pub use signature::{Argument, ReturnValue};
pub use typedef::TypeDefinition;
pub use var::VarDefinition;

use serde::Serialize;

/// Closed set of registrable definitions
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    Class(ClassDefinition),
    Extension(ClassDefinition),
    Protocol(ClassDefinition),
    Struct(AggregateDefinition),
    Union(AggregateDefinition),
    Enum(EnumDefinition),
    Var(VarDefinition),
    Function(FunctionDefinition),
    Block(BlockDefinition),
    Type(TypeDefinition),
}

impl Definition {
    pub fn base(&self) -> &DefinitionBase {
        match self {
            Definition::Class(d) | Definition::Extension(d) | Definition::Protocol(d) => &d.base,
            Definition::Struct(d) | Definition::Union(d) => &d.base,
            Definition::Enum(d) => &d.base,
            Definition::Var(d) => &d.base,
            Definition::Function(d) => &d.base,
            Definition::Block(d) => &d.base,
            Definition::Type(d) => &d.base,
        }
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    pub fn kind(&self) -> DefinitionKind {
        self.base().kind
    }

    pub fn to_ref(&self) -> DefinitionRef {
        DefinitionRef::new(self.kind(), self.name())
    }
}

/// Name-based handle on a definition (traversal cursor, cross references)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DefinitionRef {
    pub kind: DefinitionKind,
    pub name: String,
}

impl DefinitionRef {
    pub fn new(kind: DefinitionKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for DefinitionRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.name)
    }
}

/// Whether a definition carries more than its name. Decides which of two
/// same-named declarations the registry keeps.
pub trait Informative {
    fn carries_information(&self) -> bool;
}

impl Informative for ClassDefinition {
    fn carries_information(&self) -> bool {
        self.has_body()
    }
}

impl Informative for AggregateDefinition {
    fn carries_information(&self) -> bool {
        !self.fields.is_empty()
    }
}

impl Informative for EnumDefinition {
    fn carries_information(&self) -> bool {
        !self.values.is_empty()
    }
}

impl Informative for VarDefinition {
    fn carries_information(&self) -> bool {
        !self.ty.is_unknown()
    }
}

impl Informative for TypeDefinition {
    fn carries_information(&self) -> bool {
        !self.ty.is_unknown()
    }
}

impl Informative for FunctionDefinition {
    fn carries_information(&self) -> bool {
        true
    }
}

impl Informative for BlockDefinition {
    fn carries_information(&self) -> bool {
        true
    }
}

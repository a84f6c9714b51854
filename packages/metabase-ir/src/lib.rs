/*
 * Metabase IR - Objective-C header metadata extraction
 *
 * Feature-First Architecture:
 * - shared/      : Common models (SourceLocation, Type triple), helpers
 * - config/      : Session configuration (YAML)
 * - features/    : Vertical slices (parsing → type_resolution → definitions → registry)
 * - pipeline/    : Parser context, traversal driver, output document
 *
 * Input is the syntax tree of a translation unit as dumped by a libclang
 * front end; output is the metabase document consumed by the bridge
 * generator.
 */

// Crate-level lint configuration
#![allow(clippy::unnecessary_map_or)] // map_or style for compatibility
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::module_inception)] // Module naming intentional

pub mod config;
pub mod errors;
pub mod features;
pub mod pipeline;
pub mod shared;

// Re-exports
pub use config::{ConfigError, ParserConfig};
pub use errors::{MetabaseError, Result};
pub use features::definitions::{
    AggregateDefinition, Argument, BlockDefinition, ClassDefinition, Definition, DefinitionKind,
    EnumDefinition, FunctionDefinition, MethodDefinition, TypeDefinition, VarDefinition,
};
pub use features::parsing::{CursorKind, CursorNode, TypeHandle, TypeKind};
pub use features::registry::ParserTree;
pub use features::type_resolution::TypeResolver;
pub use pipeline::{parse, MetabaseDocument, ParserContext};
pub use shared::models::{LocationKind, SourceLocation, Type};

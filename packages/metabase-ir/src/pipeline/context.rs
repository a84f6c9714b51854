//! Parser context
//!
//! Owns the registry for one invocation, the immutable session config, the
//! traversal cursor and the accumulated framework dependencies.

use std::collections::BTreeSet;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::config::ParserConfig;
use crate::features::definitions::{AggregateDefinition, BlockDefinition, Definition, DefinitionRef};
use crate::features::parsing::domain::{Callable, CursorLocation, CursorNode, TypeHandle};
use crate::features::registry::ParserTree;
use crate::features::type_resolution::TypeResolver;
use crate::shared::models::{LocationKind, SourceLocation, Type};

lazy_static! {
    /// `.../Name.framework/...`; the last match wins for nested frameworks
    static ref FRAMEWORK_PATH: Regex = Regex::new(r"([^/]+)\.framework/").unwrap();
}

/// Name of the innermost `X.framework/` component of `path`
pub fn framework_from_path(path: &str) -> Option<&str> {
    FRAMEWORK_PATH
        .captures_iter(path)
        .last()
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

pub struct ParserContext {
    config: ParserConfig,
    tree: ParserTree,

    /// Definition whose subtree is being walked
    current: Option<DefinitionRef>,
    /// Last completed definition
    previous: Option<DefinitionRef>,
    /// Location of the declaration being built
    location: SourceLocation,

    /// Unnamed record waiting for the typedef that names it
    pending_aggregate: Option<AggregateDefinition>,

    dependencies: BTreeSet<String>,
}

impl ParserContext {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            tree: ParserTree::new(),
            current: None,
            previous: None,
            location: SourceLocation::unresolved(),
            pending_aggregate: None,
            dependencies: BTreeSet::new(),
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn min_version(&self) -> &str {
        &self.config.min_version
    }

    pub fn tree(&self) -> &ParserTree {
        &self.tree
    }

    /// Frameworks referenced from the generated framework, sorted
    pub fn dependencies(&self) -> &BTreeSet<String> {
        &self.dependencies
    }

    pub fn current(&self) -> Option<&DefinitionRef> {
        self.current.as_ref()
    }

    pub fn previous(&self) -> Option<&DefinitionRef> {
        self.previous.as_ref()
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    // ═══════════════════════════════════════════════════════════════
    // Locations
    // ═══════════════════════════════════════════════════════════════

    /// Classify a raw location against the session config
    pub fn classify(&self, location: Option<&CursorLocation>) -> SourceLocation {
        let Some(location) = location.filter(|l| !l.filename.is_empty()) else {
            return SourceLocation::unresolved();
        };
        let filename = location.filename.as_str();

        let system = self.is_under_sdk(filename);
        let framework = framework_from_path(filename);

        let kind = match (system, framework) {
            (true, _) => LocationKind::System,
            (false, Some(_)) => LocationKind::Framework,
            (false, None) => LocationKind::User,
        };
        let framework = match framework {
            Some(name) => name.to_string(),
            None if system => String::new(),
            None => self.config.framework_name.clone(),
        };

        SourceLocation::new(filename, location.line, framework, kind)
    }

    /// Whole path components only: `/SDK2/a.h` is not under `/SDK`
    fn is_under_sdk(&self, filename: &str) -> bool {
        !self.config.sdk_path.is_empty() && Path::new(filename).starts_with(&self.config.sdk_path)
    }

    /// Classify `node`'s location and make it the current location
    pub fn locate(&mut self, node: &CursorNode) -> SourceLocation {
        self.location = self.classify(node.location.as_ref());
        self.location.clone()
    }

    /// Whether a definition at `location` stays out of the registry.
    /// Unresolved locations are never excluded.
    pub fn is_excluded(&self, location: &SourceLocation) -> bool {
        if location.is_unresolved() {
            return false;
        }
        if self.config.exclude_system_apis && location.is_system() {
            return true;
        }
        self.config.filter_to_single_framework() && location.framework != self.config.framework_filter
    }

    /// Record the framework of a referenced declaration as a dependency
    pub fn note_reference(&mut self, location: Option<&CursorLocation>) {
        let framework = self.classify(location).framework;
        if framework.is_empty() || framework == self.config.framework_name {
            return;
        }
        if self.dependencies.insert(framework.clone()) {
            debug!(framework = %framework, "dependency");
        }
    }

    // ═══════════════════════════════════════════════════════════════
    // Type resolution
    // ═══════════════════════════════════════════════════════════════

    pub fn resolve(&mut self, handle: &TypeHandle, hint: Option<&str>) -> Type {
        let mut resolver = TypeResolver::new(&self.tree);
        let ty = resolver.resolve(handle, hint);
        let references = resolver.into_references();
        self.note_references(&references);
        ty
    }

    /// Resolve a struct/union field type
    pub fn resolve_member(&mut self, handle: &TypeHandle, hint: Option<&str>) -> Type {
        let mut resolver = TypeResolver::new(&self.tree);
        let ty = resolver.resolve_member(handle, hint);
        let references = resolver.into_references();
        self.note_references(&references);
        ty
    }

    pub fn resolve_encoding(&self, encoding: &str) -> Type {
        TypeResolver::new(&self.tree).resolve_encoding(encoding)
    }

    pub fn signature_encoding(&mut self, callable: &Callable<'_>) -> String {
        let mut resolver = TypeResolver::new(&self.tree);
        let encoding = resolver.signature_encoding(callable);
        let references = resolver.into_references();
        self.note_references(&references);
        encoding
    }

    fn note_references(&mut self, references: &[CursorLocation]) {
        for location in references {
            self.note_reference(Some(location));
        }
    }

    // ═══════════════════════════════════════════════════════════════
    // Registration
    // ═══════════════════════════════════════════════════════════════

    pub fn begin(&mut self, definition: DefinitionRef) {
        trace!(definition = %definition, "begin");
        self.current = Some(definition);
    }

    pub fn finish(&mut self) {
        if let Some(current) = self.current.take() {
            self.previous = Some(current);
        }
    }

    /// Register unless the definition's location is excluded
    pub fn register(&mut self, definition: Definition) -> bool {
        if self.is_excluded(&definition.base().location) {
            trace!(definition = %definition.to_ref(), "excluded");
            return false;
        }
        let reference = definition.to_ref();
        let stored = self.tree.register(definition);
        if stored {
            trace!(definition = %reference, "registered");
        } else {
            debug!(definition = %reference, "kept earlier declaration");
        }
        stored
    }

    /// Register a block under the framework of its using declaration
    pub fn register_block(&mut self, block: BlockDefinition) -> bool {
        if self.is_excluded(&block.base.location) {
            return false;
        }
        let framework = block.base.framework().to_string();
        self.tree.add_block(&framework, block)
    }

    pub fn set_pending_aggregate(&mut self, aggregate: AggregateDefinition) {
        if let Some(dropped) = self.pending_aggregate.replace(aggregate) {
            debug!(encoding = %dropped.encoding, "unnamed record never aliased, dropped");
        }
    }

    pub fn take_pending_aggregate(&mut self) -> Option<AggregateDefinition> {
        self.pending_aggregate.take()
    }
}

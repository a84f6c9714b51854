//! Definition registry
//!
//! One ordered, name-keyed collection per declaration kind. Blocks are
//! grouped by the framework that uses them and keyed by signature.

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::trace;

use super::named_map::NamedMap;
use crate::features::definitions::{
    AggregateDefinition, BlockDefinition, ClassDefinition, Definition, EnumDefinition,
    FunctionDefinition, TypeDefinition, VarDefinition,
};
use crate::features::type_resolution::domain::AggregateKind;
use crate::features::type_resolution::ports::TypeLookup;
use crate::shared::models::Type;

/// framework → signature → block
#[derive(Debug, Clone, Default)]
pub struct BlockMap(NamedMap<NamedMap<BlockDefinition>>);

impl BlockMap {
    pub fn insert(&mut self, framework: &str, block: BlockDefinition) -> bool {
        let blocks = self.0.get_or_insert_with(framework, NamedMap::new);
        blocks.insert(block.signature.clone(), block)
    }

    pub fn get(&self, framework: &str, signature: &str) -> Option<&BlockDefinition> {
        self.0.get(framework)?.get(signature)
    }

    /// Total number of blocks across frameworks
    pub fn len(&self) -> usize {
        self.0.values().map(NamedMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Serialized as framework → list of blocks
impl Serialize for BlockMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (framework, blocks) in self.0.iter() {
            let list: Vec<&BlockDefinition> = blocks.values().collect();
            map.serialize_entry(framework, &list)?;
        }
        map.end()
    }
}

macro_rules! registry_kind {
    ($field:ident, $ty:ty, $add:ident, $get:ident, $has:ident) => {
        pub fn $add(&mut self, definition: $ty) -> bool {
            let name = definition.base.name.clone();
            self.$field.insert(name, definition)
        }

        pub fn $get(&self, name: &str) -> Option<&$ty> {
            self.$field.get(name)
        }

        pub fn $has(&self, name: &str) -> bool {
            self.$field.contains(name)
        }

        pub fn $field(&self) -> &NamedMap<$ty> {
            &self.$field
        }
    };
}

#[derive(Debug, Clone, Default)]
pub struct ParserTree {
    classes: NamedMap<ClassDefinition>,
    extensions: NamedMap<ClassDefinition>,
    protocols: NamedMap<ClassDefinition>,
    types: NamedMap<TypeDefinition>,
    enums: NamedMap<EnumDefinition>,
    vars: NamedMap<VarDefinition>,
    functions: NamedMap<FunctionDefinition>,
    structs: NamedMap<AggregateDefinition>,
    unions: NamedMap<AggregateDefinition>,
    blocks: BlockMap,
}

impl ParserTree {
    pub fn new() -> Self {
        Self::default()
    }

    registry_kind!(classes, ClassDefinition, add_class, get_class, has_class);
    registry_kind!(protocols, ClassDefinition, add_protocol, get_protocol, has_protocol);
    registry_kind!(types, TypeDefinition, add_type, get_type, has_type);
    registry_kind!(enums, EnumDefinition, add_enum, get_enum, has_enum);
    registry_kind!(vars, VarDefinition, add_var, get_var, has_var);
    registry_kind!(functions, FunctionDefinition, add_function, get_function, has_function);
    registry_kind!(structs, AggregateDefinition, add_struct, get_struct, has_struct);
    registry_kind!(unions, AggregateDefinition, add_union, get_union, has_union);

    /// Categories of one class share a single entry
    pub fn add_extension(&mut self, extension: ClassDefinition) -> bool {
        match self.extensions.get_mut(&extension.base.name) {
            Some(existing) => {
                trace!(class = %extension.base.name, "merging category");
                existing.merge(extension);
            }
            None => {
                self.extensions.put(extension.base.name.clone(), extension);
            }
        }
        true
    }

    pub fn get_extension(&self, name: &str) -> Option<&ClassDefinition> {
        self.extensions.get(name)
    }

    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }

    pub fn extensions(&self) -> &NamedMap<ClassDefinition> {
        &self.extensions
    }

    pub fn add_block(&mut self, framework: &str, block: BlockDefinition) -> bool {
        self.blocks.insert(framework, block)
    }

    pub fn get_block(&self, framework: &str, signature: &str) -> Option<&BlockDefinition> {
        self.blocks.get(framework, signature)
    }

    pub fn has_block(&self, framework: &str, signature: &str) -> bool {
        self.get_block(framework, signature).is_some()
    }

    pub fn blocks(&self) -> &BlockMap {
        &self.blocks
    }

    /// Route a definition to its collection
    pub fn register(&mut self, definition: Definition) -> bool {
        match definition {
            Definition::Class(d) => self.add_class(d),
            Definition::Extension(d) => self.add_extension(d),
            Definition::Protocol(d) => self.add_protocol(d),
            Definition::Struct(d) => self.add_struct(d),
            Definition::Union(d) => self.add_union(d),
            Definition::Enum(d) => self.add_enum(d),
            Definition::Var(d) => self.add_var(d),
            Definition::Function(d) => self.add_function(d),
            Definition::Block(d) => {
                let framework = d.base.framework().to_string();
                self.add_block(&framework, d)
            }
            Definition::Type(d) => self.add_type(d),
        }
    }

    /// Number of registered definitions, blocks included
    pub fn len(&self) -> usize {
        self.classes.len()
            + self.extensions.len()
            + self.protocols.len()
            + self.types.len()
            + self.enums.len()
            + self.vars.len()
            + self.functions.len()
            + self.structs.len()
            + self.unions.len()
            + self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TypeLookup for ParserTree {
    fn aggregate_members(&self, kind: AggregateKind, name: &str) -> Option<Vec<String>> {
        let aggregate = match kind {
            AggregateKind::Struct => self.structs.get(name),
            AggregateKind::Union => self.unions.get(name),
        }?;
        if aggregate.fields.is_empty() {
            return None;
        }
        Some(aggregate.member_encodings())
    }

    fn typedef_type(&self, name: &str) -> Option<Type> {
        self.types
            .get(name)
            .map(|t| t.ty.clone())
            .filter(|ty| !ty.is_unknown())
    }
}

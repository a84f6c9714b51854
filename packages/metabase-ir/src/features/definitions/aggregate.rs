//! Structs and unions

use serde::Serialize;

use super::base::{DefinitionBase, DefinitionKind};
use crate::features::parsing::domain::{CursorKind, CursorNode};
use crate::features::type_resolution::domain::{aggregate_encoding, AggregateKind};
use crate::pipeline::ParserContext;
use crate::shared::models::Type;
use crate::shared::utils::is_anonymous_name;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: String,

    #[serde(flatten)]
    pub ty: Type,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateDefinition {
    #[serde(flatten)]
    pub base: DefinitionBase,

    pub fields: Vec<Field>,

    /// `{Name=...}` / `(Name=...)`, or the bare `{Name}` for opaque records
    pub encoding: String,
}

impl AggregateDefinition {
    pub fn from_cursor(node: &CursorNode, kind: AggregateKind, ctx: &mut ParserContext) -> Self {
        let definition_kind = match kind {
            AggregateKind::Struct => DefinitionKind::Struct,
            AggregateKind::Union => DefinitionKind::Union,
        };
        let base = DefinitionBase::from_cursor(node, &node.name, definition_kind, ctx);
        let fields = node
            .children_of(&CursorKind::FieldDecl)
            .map(|field| Field {
                name: field.name.clone(),
                ty: match &field.ty {
                    Some(handle) => ctx.resolve_member(handle, field.encoding.as_deref()),
                    None => ctx.resolve_encoding(field.encoding.as_deref().unwrap_or_default()),
                },
            })
            .collect();

        let mut aggregate = Self {
            base,
            fields,
            encoding: String::new(),
        };
        aggregate.encoding = aggregate.synthesize_encoding();
        aggregate
    }

    pub fn aggregate_kind(&self) -> AggregateKind {
        match self.base.kind {
            DefinitionKind::Union => AggregateKind::Union,
            _ => AggregateKind::Struct,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        is_anonymous_name(&self.base.name)
    }

    /// Give an anonymous record the name of the typedef aliasing it
    pub fn rename(&mut self, name: &str) {
        self.base.name = name.to_string();
        self.encoding = self.synthesize_encoding();
    }

    pub fn member_encodings(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.ty.encoding.clone()).collect()
    }

    fn synthesize_encoding(&self) -> String {
        let (open, close) = self.aggregate_kind().delimiters();
        let name = if self.is_anonymous() {
            "?"
        } else {
            self.base.name.as_str()
        };
        if self.fields.is_empty() {
            return aggregate_encoding(open, close, name, None);
        }
        let members: Vec<&str> = self.fields.iter().map(|f| f.ty.encoding.as_str()).collect();
        aggregate_encoding(open, close, name, Some(&members))
    }

    /// Type of a value of this record
    pub fn as_type(&self) -> Type {
        Type::new(
            self.aggregate_kind().as_str(),
            self.base.name.clone(),
            self.encoding.clone(),
        )
    }
}

//! Typedefs

use serde::Serialize;

use super::base::{DefinitionBase, DefinitionKind};
use super::block::BlockDefinition;
use crate::features::parsing::domain::CursorNode;
use crate::pipeline::ParserContext;
use crate::shared::models::Type;

/// `typedef <aliased> Name;` with the aliased type resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDefinition {
    #[serde(flatten)]
    pub base: DefinitionBase,

    #[serde(flatten)]
    pub ty: Type,
}

impl TypeDefinition {
    pub fn new(base: DefinitionBase, ty: Type) -> Self {
        Self { base, ty }
    }

    /// The cursor's type handle is the aliased (underlying) type
    pub fn from_cursor(node: &CursorNode, ctx: &mut ParserContext) -> Self {
        let base = DefinitionBase::from_cursor(node, &node.name, DefinitionKind::Type, ctx);
        let hint = node.encoding.as_deref();
        let ty = match &node.ty {
            Some(handle) => {
                let ty = ctx.resolve(handle, hint);
                BlockDefinition::collect(handle, ctx);
                ty
            }
            None => ctx.resolve_encoding(hint.unwrap_or_default()),
        };
        Self { base, ty }
    }
}

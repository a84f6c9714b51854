//! Enumerations

use serde::Serialize;

use super::base::{DefinitionBase, DefinitionKind};
use super::var::VarDefinition;
use crate::features::parsing::domain::{CursorKind, CursorNode};
use crate::pipeline::ParserContext;
use crate::shared::models::Type;
use crate::shared::utils::is_anonymous_name;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumCase {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumDefinition {
    #[serde(flatten)]
    pub base: DefinitionBase,

    /// Integer type backing the enum
    #[serde(flatten)]
    pub ty: Type,

    pub values: Vec<EnumCase>,
}

impl EnumDefinition {
    pub fn from_cursor(node: &CursorNode, ctx: &mut ParserContext) -> Self {
        let base = DefinitionBase::from_cursor(node, &node.name, DefinitionKind::Enum, ctx);
        let ty = integer_type(node, ctx);
        let values = cases(node, ctx);
        Self { base, ty, values }
    }

    pub fn value(&self, name: &str) -> Option<i64> {
        self.values.iter().find(|c| c.name == name).map(|c| c.value)
    }
}

/// Constants of an anonymous enum, exposed as global vars
pub fn anonymous_constants(node: &CursorNode, ctx: &mut ParserContext) -> Vec<VarDefinition> {
    let ty = integer_type(node, ctx);
    let constants: Vec<&CursorNode> = node
        .children_of(&CursorKind::EnumConstantDecl)
        .filter(|constant| constant.is_available(ctx.min_version()))
        .collect();

    constants
        .into_iter()
        .map(|constant| {
            let base =
                DefinitionBase::from_cursor(constant, &constant.name, DefinitionKind::Var, ctx);
            VarDefinition::new(base, ty.clone())
        })
        .collect()
}

pub fn is_anonymous_enum(node: &CursorNode) -> bool {
    is_anonymous_name(&node.name)
}

fn integer_type(node: &CursorNode, ctx: &mut ParserContext) -> Type {
    match &node.ty {
        Some(handle) => ctx.resolve(handle, node.encoding.as_deref()),
        None => Type::new("int", "int", "i"),
    }
}

/// Constant values; implicit values continue from the previous constant
fn cases(node: &CursorNode, ctx: &ParserContext) -> Vec<EnumCase> {
    let mut next = 0i64;
    node.children_of(&CursorKind::EnumConstantDecl)
        .filter(|constant| constant.is_available(ctx.min_version()))
        .map(|constant| {
            let value = constant.value.unwrap_or(next);
            next = value.wrapping_add(1);
            EnumCase {
                name: constant.name.clone(),
                value,
            }
        })
        .collect()
}

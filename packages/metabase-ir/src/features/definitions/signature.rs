//! Arguments and return values of methods, functions and blocks

use serde::Serialize;

use super::block::BlockDefinition;
use crate::features::parsing::domain::{CursorKind, CursorNode, TypeHandle};
use crate::pipeline::ParserContext;
use crate::shared::models::Type;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Argument {
    /// Parameter name; block signatures carry none
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(flatten)]
    pub ty: Type,

    /// Signature of a block-typed argument
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<BlockDefinition>,
}

impl Argument {
    /// From a `ParmDecl`; `hint` is the argument's slice of the owning
    /// method encoding
    pub fn from_cursor(node: &CursorNode, hint: Option<&str>, ctx: &mut ParserContext) -> Self {
        match &node.ty {
            Some(handle) => Self::from_handle(&node.name, handle, hint, ctx),
            None => Self {
                name: node.name.clone(),
                ty: ctx.resolve_encoding(hint.unwrap_or_default()),
                block: None,
            },
        }
    }

    pub fn from_handle(
        name: &str,
        handle: &TypeHandle,
        hint: Option<&str>,
        ctx: &mut ParserContext,
    ) -> Self {
        let ty = ctx.resolve(handle, hint);
        let block = BlockDefinition::collect(handle, ctx);
        Self {
            name: name.to_string(),
            ty,
            block,
        }
    }
}

/// Return type; a block-returning callable also carries the block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnValue {
    #[serde(flatten)]
    pub ty: Type,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<Box<BlockDefinition>>,
}

impl ReturnValue {
    pub fn void() -> Self {
        Self::from_type(Type::new("void", "void", "v"))
    }

    pub fn from_type(ty: Type) -> Self {
        Self { ty, block: None }
    }

    pub fn from_handle(handle: &TypeHandle, hint: Option<&str>, ctx: &mut ParserContext) -> Self {
        let ty = ctx.resolve(handle, hint);
        let block = BlockDefinition::collect(handle, ctx).map(Box::new);
        Self { ty, block }
    }
}

/// `ParmDecl` children of a method or function, with per-position hints
pub(crate) fn arguments_of(
    node: &CursorNode,
    hints: &[String],
    ctx: &mut ParserContext,
) -> Vec<Argument> {
    node.children
        .iter()
        .filter(|c| c.kind == CursorKind::ParmDecl)
        .enumerate()
        .map(|(i, param)| Argument::from_cursor(param, hints.get(i).map(String::as_str), ctx))
        .collect()
}

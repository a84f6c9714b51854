//! Properties and instance variables

use serde::Serialize;

use crate::features::parsing::domain::CursorNode;
use crate::pipeline::ParserContext;
use crate::shared::models::Type;

use super::block::BlockDefinition;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyDefinition {
    pub name: String,

    #[serde(flatten)]
    pub ty: Type,

    /// `readonly`, `copy`, `nonatomic`, `class`, ...
    pub attributes: Vec<String>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<BlockDefinition>,

    #[serde(rename = "introducedIn", skip_serializing_if = "Option::is_none")]
    pub introduced_in: Option<String>,
}

impl PropertyDefinition {
    pub fn from_cursor(node: &CursorNode, ctx: &mut ParserContext) -> Self {
        let (ty, block) = resolve_member_type(node, ctx);
        Self {
            name: node.name.clone(),
            ty,
            attributes: node.attributes.clone(),
            optional: node.optional,
            block,
            introduced_in: node.introduced_in().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IvarDefinition {
    pub name: String,

    #[serde(flatten)]
    pub ty: Type,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<BlockDefinition>,
}

impl IvarDefinition {
    pub fn from_cursor(node: &CursorNode, ctx: &mut ParserContext) -> Self {
        let (ty, block) = resolve_member_type(node, ctx);
        Self {
            name: node.name.clone(),
            ty,
            block,
        }
    }
}

fn resolve_member_type(node: &CursorNode, ctx: &mut ParserContext) -> (Type, Option<BlockDefinition>) {
    let hint = node.encoding.as_deref();
    match &node.ty {
        Some(handle) => {
            let ty = ctx.resolve(handle, hint);
            (ty, BlockDefinition::collect(handle, ctx))
        }
        None => (ctx.resolve_encoding(hint.unwrap_or_default()), None),
    }
}

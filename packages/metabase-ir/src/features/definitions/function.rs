//! C functions

use serde::Serialize;

use super::base::{DefinitionBase, DefinitionKind};
use super::signature::{arguments_of, Argument, ReturnValue};
use crate::features::parsing::domain::CursorNode;
use crate::pipeline::ParserContext;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDefinition {
    #[serde(flatten)]
    pub base: DefinitionBase,

    pub returns: ReturnValue,

    pub arguments: Vec<Argument>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub variadic: bool,
}

impl FunctionDefinition {
    pub fn from_cursor(node: &CursorNode, ctx: &mut ParserContext) -> Self {
        let base = DefinitionBase::from_cursor(node, &node.name, DefinitionKind::Function, ctx);

        let proto = node.ty.as_ref().map(|t| t.desugared());
        let result = node
            .result_type
            .as_ref()
            .or_else(|| proto.and_then(|p| p.result.as_deref()));
        let returns = match result {
            Some(handle) => ReturnValue::from_handle(handle, None, ctx),
            None => ReturnValue::void(),
        };
        let arguments = arguments_of(node, &[], ctx);
        let variadic = proto.map_or(false, |p| p.variadic);

        Self {
            base,
            returns,
            arguments,
            variadic,
        }
    }
}

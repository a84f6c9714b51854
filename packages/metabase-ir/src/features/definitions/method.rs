//! Objective-C methods

use serde::Serialize;

use super::signature::{arguments_of, Argument, ReturnValue};
use crate::features::parsing::domain::{CursorKind, CursorNode};
use crate::features::type_resolution::domain::{method_argument_encodings, return_encoding};
use crate::pipeline::ParserContext;
use crate::shared::utils::selector_to_name;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodDefinition {
    /// Selector folded into camel case: `initWithFrame:style:` → `initWithFrameStyle`
    pub name: String,

    pub selector: String,

    /// Owning class, category target or protocol
    #[serde(rename = "class")]
    pub owner: String,

    pub instance: bool,

    pub optional: bool,

    pub returns: ReturnValue,

    pub arguments: Vec<Argument>,

    /// Raw method type encoding as reported by the front end
    pub encoding: String,

    #[serde(rename = "introducedIn", skip_serializing_if = "Option::is_none")]
    pub introduced_in: Option<String>,
}

impl MethodDefinition {
    pub fn from_cursor(node: &CursorNode, owner: &str, ctx: &mut ParserContext) -> Self {
        let selector = node.name.clone();
        let encoding = node.encoding.clone().unwrap_or_default();
        let hints = method_argument_encodings(&encoding);
        let return_hint = return_encoding(&encoding);

        let returns = match &node.result_type {
            Some(handle) => ReturnValue::from_handle(handle, return_hint.as_deref(), ctx),
            None => match return_hint {
                Some(hint) => ReturnValue::from_type(ctx.resolve_encoding(&hint)),
                None => ReturnValue::void(),
            },
        };
        let arguments = arguments_of(node, &hints, ctx);

        Self {
            name: selector_to_name(&selector),
            selector,
            owner: owner.to_string(),
            instance: node.kind == CursorKind::ObjCInstanceMethodDecl,
            optional: node.optional,
            returns,
            arguments,
            encoding,
            introduced_in: node.introduced_in().map(str::to_string),
        }
    }
}

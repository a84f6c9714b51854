//! Block signatures
//!
//! Every block type met while building a declaration (argument, return
//! value, property, typedef) is registered under the framework of that
//! declaration, keyed by its signature spelling.

use serde::Serialize;
use tracing::trace;

use super::base::{DefinitionBase, DefinitionKind};
use super::signature::Argument;
use crate::features::parsing::domain::{CallableKind, TypeHandle};
use crate::pipeline::ParserContext;
use crate::shared::models::Type;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockDefinition {
    #[serde(flatten)]
    pub base: DefinitionBase,

    /// Signature as spelled in the header: `void (^)(BOOL)`
    pub signature: String,

    pub returns: Type,

    pub arguments: Vec<Argument>,

    /// Signature encoding without the `@?<...>` wrapper: `v@?B`
    pub encoding: String,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub variadic: bool,
}

impl BlockDefinition {
    /// Build the block definition for `handle`, if it is a block type.
    /// Located at the declaration currently being built.
    pub fn from_handle(handle: &TypeHandle, ctx: &mut ParserContext) -> Option<Self> {
        let callable = handle
            .callable()
            .filter(|c| c.kind == CallableKind::Block)?;

        let signature = callable
            .handle
            .desugared()
            .spelling
            .clone();
        let base = DefinitionBase::new(signature.clone(), DefinitionKind::Block, ctx.location().clone());

        let returns = match callable.result {
            Some(result) => ctx.resolve(result, None),
            None => Type::new("void", "void", "v"),
        };
        let arguments = callable
            .arguments
            .iter()
            .map(|argument| Argument::from_handle("", argument, None, ctx))
            .collect();
        let encoding = ctx.signature_encoding(&callable);

        Some(Self {
            base,
            signature,
            returns,
            arguments,
            encoding,
            variadic: callable.variadic,
        })
    }

    /// Build and register the block definition for `handle`
    pub fn collect(handle: &TypeHandle, ctx: &mut ParserContext) -> Option<Self> {
        let block = Self::from_handle(handle, ctx)?;
        trace!(signature = %block.signature, framework = %block.base.framework(), "block");
        ctx.register_block(block.clone());
        Some(block)
    }
}

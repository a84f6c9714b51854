//! Base record shared by every definition variant

use serde::{Deserialize, Serialize};

use crate::features::parsing::domain::CursorNode;
use crate::pipeline::ParserContext;
use crate::shared::models::{LocationKind, SourceLocation};

/// Definition flavour, serialized as the fragment's `kind`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefinitionKind {
    Class,
    Extension,
    Protocol,
    Struct,
    Union,
    Enum,
    Var,
    Function,
    Block,
    #[serde(rename = "typedef")]
    Type,
}

impl DefinitionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefinitionKind::Class => "class",
            DefinitionKind::Extension => "extension",
            DefinitionKind::Protocol => "protocol",
            DefinitionKind::Struct => "struct",
            DefinitionKind::Union => "union",
            DefinitionKind::Enum => "enum",
            DefinitionKind::Var => "var",
            DefinitionKind::Function => "function",
            DefinitionKind::Block => "block",
            DefinitionKind::Type => "typedef",
        }
    }
}

impl std::fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefinitionBase {
    pub name: String,
    pub kind: DefinitionKind,

    #[serde(flatten)]
    pub location: SourceLocation,

    /// Anything not shipped with the SDK
    pub thirdparty: bool,

    #[serde(rename = "introducedIn", skip_serializing_if = "Option::is_none")]
    pub introduced_in: Option<String>,
}

impl DefinitionBase {
    pub fn new(name: impl Into<String>, kind: DefinitionKind, location: SourceLocation) -> Self {
        let thirdparty = location.kind != LocationKind::System;
        Self {
            name: name.into(),
            kind,
            location,
            thirdparty,
            introduced_in: None,
        }
    }

    /// Base for `node`, classifying its location against the session config
    pub fn from_cursor(
        node: &CursorNode,
        name: impl Into<String>,
        kind: DefinitionKind,
        ctx: &mut ParserContext,
    ) -> Self {
        let location = ctx.locate(node);
        let mut base = Self::new(name, kind, location);
        base.introduced_in = node.introduced_in().map(str::to_string);
        base
    }

    pub fn framework(&self) -> &str {
        &self.location.framework
    }
}

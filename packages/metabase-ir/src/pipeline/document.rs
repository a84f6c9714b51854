//! Output document
//!
//! Top-level keys are emitted in a fixed order; entries inside each
//! collection keep registry insertion order.

use std::io::Write;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::context::ParserContext;
use crate::errors::Result;
use crate::features::definitions::{
    AggregateDefinition, ClassDefinition, EnumDefinition, FunctionDefinition, TypeDefinition,
    VarDefinition,
};
use crate::features::registry::{BlockMap, NamedMap};

/// Version of the document layout
pub const API_VERSION: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    #[serde(rename = "api-version")]
    pub api_version: String,

    /// RFC 3339 timestamp
    pub generated: String,

    #[serde(rename = "sdk-path")]
    pub sdk_path: String,

    #[serde(rename = "min-version")]
    pub min_version: String,

    pub framework: String,
}

#[derive(Debug, Serialize)]
pub struct MetabaseDocument<'a> {
    pub classes: &'a NamedMap<ClassDefinition>,
    pub extensions: &'a NamedMap<ClassDefinition>,
    pub protocols: &'a NamedMap<ClassDefinition>,
    pub types: &'a NamedMap<TypeDefinition>,
    pub enums: &'a NamedMap<EnumDefinition>,
    pub vars: &'a NamedMap<VarDefinition>,
    pub functions: &'a NamedMap<FunctionDefinition>,
    pub structs: &'a NamedMap<AggregateDefinition>,
    pub unions: &'a NamedMap<AggregateDefinition>,
    pub blocks: &'a BlockMap,
    pub dependencies: Vec<&'a str>,
    pub metadata: Metadata,
}

impl<'a> MetabaseDocument<'a> {
    pub fn new(ctx: &'a ParserContext) -> Self {
        Self::generated_at(ctx, Utc::now())
    }

    pub fn generated_at(ctx: &'a ParserContext, generated: DateTime<Utc>) -> Self {
        let tree = ctx.tree();
        let config = ctx.config();
        Self {
            classes: tree.classes(),
            extensions: tree.extensions(),
            protocols: tree.protocols(),
            types: tree.types(),
            enums: tree.enums(),
            vars: tree.vars(),
            functions: tree.functions(),
            structs: tree.structs(),
            unions: tree.unions(),
            blocks: tree.blocks(),
            dependencies: ctx.dependencies().iter().map(String::as_str).collect(),
            metadata: Metadata {
                api_version: API_VERSION.to_string(),
                generated: generated.to_rfc3339_opts(SecondsFormat::Secs, true),
                sdk_path: config.sdk_path.clone(),
                min_version: config.min_version.clone(),
                framework: config.framework_name.clone(),
            },
        }
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub fn write_to<W: Write>(&self, mut writer: W, pretty: bool) -> Result<()> {
        if pretty {
            serde_json::to_writer_pretty(&mut writer, self)?;
        } else {
            serde_json::to_writer(&mut writer, self)?;
        }
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

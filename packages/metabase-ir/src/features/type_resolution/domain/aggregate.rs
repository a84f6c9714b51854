//! Aggregate (struct/union) kinds

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateKind {
    Struct,
    Union,
}

impl AggregateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateKind::Struct => "struct",
            AggregateKind::Union => "union",
        }
    }

    /// Encoding delimiters: `{...}` for structs, `(...)` for unions
    pub fn delimiters(&self) -> (char, char) {
        match self {
            AggregateKind::Struct => ('{', '}'),
            AggregateKind::Union => ('(', ')'),
        }
    }
}

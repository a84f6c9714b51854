//! Resolved type triple
//!
//! Every typed field in the document carries `{type, value, encoding}`:
//! a coarse type name the bridge dispatches on, the source spelling, and the
//! runtime type encoding used for marshalling.

use serde::{Deserialize, Serialize};

/// Encoding emitted when a type cannot be reduced any further
pub const UNKNOWN_ENCODING: &str = "?";

/// Type name paired with [`UNKNOWN_ENCODING`]
pub const UNKNOWN_TYPE: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Type {
    #[serde(rename = "type")]
    pub type_name: String,
    pub value: String,
    pub encoding: String,
}

impl Type {
    pub fn new(
        type_name: impl Into<String>,
        value: impl Into<String>,
        encoding: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            value: value.into(),
            encoding: encoding.into(),
        }
    }

    /// Explicit unknown marker; keeps the spelling for the downstream consumer
    pub fn unknown(value: impl Into<String>) -> Self {
        Self::new(UNKNOWN_TYPE, value, UNKNOWN_ENCODING)
    }

    pub fn is_unknown(&self) -> bool {
        self.encoding == UNKNOWN_ENCODING
    }

    /// Same type, different spelling (typedef and attributed sugar)
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

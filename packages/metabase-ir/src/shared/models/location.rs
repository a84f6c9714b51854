//! Source location types
//!
//! A location is classified once, when its declaration is first visited.

use serde::{Deserialize, Serialize};

/// Where a declaration lives relative to the session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    /// Under the configured SDK root
    System,
    /// Inside a `*.framework` bundle outside the SDK
    Framework,
    /// Anything else, including unresolvable paths
    User,
}

/// Classified source location of a declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub filename: String,
    pub line: u32,
    /// Owning framework name, `""` for non-framework SDK headers
    pub framework: String,
    #[serde(rename = "location")]
    pub kind: LocationKind,
}

impl SourceLocation {
    pub fn new(
        filename: impl Into<String>,
        line: u32,
        framework: impl Into<String>,
        kind: LocationKind,
    ) -> Self {
        Self {
            filename: filename.into(),
            line,
            framework: framework.into(),
            kind,
        }
    }

    /// Location for nodes the front end could not place
    pub fn unresolved() -> Self {
        Self::new("", 0, "", LocationKind::User)
    }

    pub fn is_system(&self) -> bool {
        self.kind == LocationKind::System
    }

    /// True when the path could not be resolved by the front end
    pub fn is_unresolved(&self) -> bool {
        self.filename.is_empty()
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::unresolved()
    }
}

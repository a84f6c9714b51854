//! Cursor tree handed over by the syntax front end
//!
//! Mirrors what a libclang visitor can observe for one node: kind tag,
//! display name, location, type handle and children. The tree is fully
//! materialized before traversal starts and is never mutated.

use serde::{Deserialize, Serialize};

use super::type_handle::TypeHandle;
use crate::shared::utils::compare_versions;

crate::string_enum! {
    /// Declaration/reference kind of a cursor
    pub enum CursorKind {
        TranslationUnit,
        ObjCInterfaceDecl,
        ObjCCategoryDecl,
        ObjCProtocolDecl,
        ObjCInstanceMethodDecl,
        ObjCClassMethodDecl,
        ObjCPropertyDecl,
        ObjCIvarDecl,
        ObjCSuperClassRef,
        ObjCProtocolRef,
        ObjCClassRef,
        StructDecl,
        UnionDecl,
        FieldDecl,
        EnumDecl,
        EnumConstantDecl,
        FunctionDecl,
        VarDecl,
        ParmDecl,
        TypedefDecl,
        TypeRef,
        /// `extern "C" { ... }` wrapper
        LinkageSpec,
        UnexposedDecl,
    }
}

impl CursorKind {
    /// Wrappers whose children are treated as if they were top-level
    pub fn is_transparent(&self) -> bool {
        matches!(self, CursorKind::LinkageSpec | CursorKind::UnexposedDecl)
    }
}

/// Raw (unclassified) location reported by the front end
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CursorLocation {
    pub filename: String,
    #[serde(default)]
    pub line: u32,
}

impl CursorLocation {
    pub fn new(filename: impl Into<String>, line: u32) -> Self {
        Self {
            filename: filename.into(),
            line,
        }
    }
}

/// Platform availability attached to a declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    #[serde(default)]
    pub introduced: Option<String>,
    #[serde(default)]
    pub deprecated: Option<String>,
    #[serde(default)]
    pub obsoleted: Option<String>,
    /// Explicitly marked unavailable on the target platform
    #[serde(default)]
    pub unavailable: bool,
}

impl Availability {
    pub fn introduced(version: impl Into<String>) -> Self {
        Self {
            introduced: Some(version.into()),
            ..Self::default()
        }
    }

    /// Whether a declaration with this availability applies when targeting
    /// `min_version`. Unparseable versions count as applicable.
    pub fn applies_to(&self, min_version: &str) -> bool {
        if self.unavailable {
            return false;
        }
        match &self.obsoleted {
            Some(obsoleted) => !matches!(
                compare_versions(obsoleted, min_version),
                Some(std::cmp::Ordering::Less | std::cmp::Ordering::Equal)
            ),
            None => true,
        }
    }
}

/// One node of the external syntax tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursorNode {
    pub kind: CursorKind,

    /// Display name (selector for methods, empty for unnamed declarations)
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub location: Option<CursorLocation>,

    #[serde(default, rename = "type")]
    pub ty: Option<TypeHandle>,

    /// Result type of methods and functions
    #[serde(default)]
    pub result_type: Option<TypeHandle>,

    /// Runtime type encoding of the declaration (`clang_getDeclObjCTypeEncoding`)
    #[serde(default)]
    pub encoding: Option<String>,

    /// Enum constant value
    #[serde(default)]
    pub value: Option<i64>,

    /// `@optional` protocol requirement
    #[serde(default)]
    pub optional: bool,

    /// Property attributes (`readonly`, `copy`, `nonatomic`, ...)
    #[serde(default)]
    pub attributes: Vec<String>,

    #[serde(default)]
    pub availability: Option<Availability>,

    /// Declaration location of the referenced entity, for `*Ref` cursors
    #[serde(default)]
    pub referenced: Option<CursorLocation>,

    #[serde(default)]
    pub children: Vec<CursorNode>,
}

impl CursorNode {
    pub fn new(kind: CursorKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            location: None,
            ty: None,
            result_type: None,
            encoding: None,
            value: None,
            optional: false,
            attributes: Vec::new(),
            availability: None,
            referenced: None,
            children: Vec::new(),
        }
    }

    pub fn at(mut self, filename: impl Into<String>, line: u32) -> Self {
        self.location = Some(CursorLocation::new(filename, line));
        self
    }

    pub fn with_type(mut self, ty: TypeHandle) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn with_result_type(mut self, ty: TypeHandle) -> Self {
        self.result_type = Some(ty);
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn with_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = attributes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = Some(availability);
        self
    }

    pub fn referencing(mut self, filename: impl Into<String>, line: u32) -> Self {
        self.referenced = Some(CursorLocation::new(filename, line));
        self
    }

    pub fn with_child(mut self, child: CursorNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<CursorNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Children of the given kind, in declaration order
    pub fn children_of<'a>(&'a self, kind: &'a CursorKind) -> impl Iterator<Item = &'a CursorNode> {
        self.children.iter().filter(move |c| &c.kind == kind)
    }

    /// First child of the given kind
    pub fn find_child(&self, kind: &CursorKind) -> Option<&CursorNode> {
        self.children.iter().find(|c| &c.kind == kind)
    }

    /// Filename of this node, empty when the front end could not resolve it
    pub fn filename(&self) -> &str {
        self.location
            .as_ref()
            .map(|l| l.filename.as_str())
            .unwrap_or("")
    }

    /// Declaration applies to the target minimum version
    pub fn is_available(&self, min_version: &str) -> bool {
        self.availability
            .as_ref()
            .map_or(true, |a| a.applies_to(min_version))
    }

    pub fn introduced_in(&self) -> Option<&str> {
        self.availability.as_ref()?.introduced.as_deref()
    }
}

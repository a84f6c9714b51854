//! Type handle attached to cursors
//!
//! A materialized view of what `CXType` exposes: kind, spelling and the
//! handles reachable from it (pointee, canonical type, function result and
//! arguments, record fields, array element).

use serde::{Deserialize, Serialize};

use super::cursor::CursorLocation;

crate::string_enum! {
    /// Type category reported by the front end
    pub enum TypeKind {
        Void,
        Bool,
        CharS,
        SChar,
        CharU,
        UChar,
        Char16,
        Char32,
        WChar,
        Short,
        UShort,
        Int,
        UInt,
        Long,
        ULong,
        LongLong,
        ULongLong,
        Int128,
        UInt128,
        Float,
        Double,
        LongDouble,
        Pointer,
        BlockPointer,
        ObjCId,
        ObjCClass,
        ObjCSel,
        ObjCObjectPointer,
        ObjCInterface,
        ObjCObject,
        ObjCTypeParam,
        Struct,
        Union,
        Enum,
        Typedef,
        Elaborated,
        Attributed,
        FunctionProto,
        FunctionNoProto,
        ConstantArray,
        IncompleteArray,
        Vector,
        Unexposed,
        Dependent,
        Invalid,
    }
}

impl TypeKind {
    /// Sugar kinds that resolve through their canonical type
    pub fn is_sugar(&self) -> bool {
        matches!(
            self,
            TypeKind::Typedef | TypeKind::Elaborated | TypeKind::Attributed
        )
    }

    pub fn is_function(&self) -> bool {
        matches!(self, TypeKind::FunctionProto | TypeKind::FunctionNoProto)
    }

    /// Pointers to any of these encode as `*`
    pub fn is_char(&self) -> bool {
        matches!(
            self,
            TypeKind::CharS | TypeKind::SChar | TypeKind::CharU | TypeKind::UChar
        )
    }
}

/// Named record field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldHandle {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeHandle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeHandle {
    pub kind: TypeKind,

    #[serde(default)]
    pub spelling: String,

    #[serde(default)]
    pub pointee: Option<Box<TypeHandle>>,

    /// Underlying type for typedef/elaborated/attributed sugar, the integer
    /// type for enums, and the desugared type for unexposed handles
    #[serde(default)]
    pub canonical: Option<Box<TypeHandle>>,

    /// Result type of function prototypes
    #[serde(default)]
    pub result: Option<Box<TypeHandle>>,

    /// Argument types of function prototypes
    #[serde(default)]
    pub arguments: Vec<TypeHandle>,

    /// Record fields, when the front end expanded them
    #[serde(default)]
    pub fields: Vec<FieldHandle>,

    #[serde(default)]
    pub element: Option<Box<TypeHandle>>,

    #[serde(default)]
    pub size: Option<u64>,

    #[serde(default)]
    pub variadic: bool,

    /// Header that declares the named type, if any
    #[serde(default)]
    pub declaration: Option<CursorLocation>,
}

/// Callable flavour of a block or function pointer type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallableKind {
    Block,
    FunctionPointer,
}

/// Signature parts of a block or function pointer
#[derive(Debug, Clone, Copy)]
pub struct Callable<'a> {
    pub kind: CallableKind,
    /// The sugared handle as written (its spelling is the signature)
    pub handle: &'a TypeHandle,
    pub result: Option<&'a TypeHandle>,
    pub arguments: &'a [TypeHandle],
    pub variadic: bool,
}

impl TypeHandle {
    pub fn new(kind: TypeKind, spelling: impl Into<String>) -> Self {
        Self {
            kind,
            spelling: spelling.into(),
            pointee: None,
            canonical: None,
            result: None,
            arguments: Vec::new(),
            fields: Vec::new(),
            element: None,
            size: None,
            variadic: false,
            declaration: None,
        }
    }

    pub fn pointer_to(pointee: TypeHandle) -> Self {
        let spelling = format!("{} *", pointee.spelling);
        let mut handle = Self::new(TypeKind::Pointer, spelling);
        handle.pointee = Some(Box::new(pointee));
        handle
    }

    /// `ClassName *`
    pub fn object_pointer(class_name: &str) -> Self {
        let mut handle = Self::new(TypeKind::ObjCObjectPointer, format!("{class_name} *"));
        handle.pointee = Some(Box::new(Self::new(TypeKind::ObjCInterface, class_name)));
        handle
    }

    fn function_proto(result: TypeHandle, arguments: Vec<TypeHandle>) -> Self {
        let args = arguments
            .iter()
            .map(|a| a.spelling.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let mut handle = Self::new(
            TypeKind::FunctionProto,
            format!("{} ({})", result.spelling, args),
        );
        handle.result = Some(Box::new(result));
        handle.arguments = arguments;
        handle
    }

    /// `R (^)(A...)`
    pub fn block(result: TypeHandle, arguments: Vec<TypeHandle>) -> Self {
        let proto = Self::function_proto(result, arguments);
        let spelling = block_spelling(&proto, "^");
        let mut handle = Self::new(TypeKind::BlockPointer, spelling);
        handle.pointee = Some(Box::new(proto));
        handle
    }

    /// `R (*)(A...)`
    pub fn function_pointer(result: TypeHandle, arguments: Vec<TypeHandle>) -> Self {
        let proto = Self::function_proto(result, arguments);
        let spelling = block_spelling(&proto, "*");
        let mut handle = Self::new(TypeKind::Pointer, spelling);
        handle.pointee = Some(Box::new(proto));
        handle
    }

    pub fn struct_of(name: &str, fields: Vec<(&str, TypeHandle)>) -> Self {
        Self::record(TypeKind::Struct, format!("struct {name}"), fields)
    }

    pub fn union_of(name: &str, fields: Vec<(&str, TypeHandle)>) -> Self {
        Self::record(TypeKind::Union, format!("union {name}"), fields)
    }

    /// Record with an explicit spelling (anonymous records)
    pub fn record_named(kind: TypeKind, spelling: &str, fields: Vec<(&str, TypeHandle)>) -> Self {
        Self::record(kind, spelling.to_string(), fields)
    }

    fn record(kind: TypeKind, spelling: String, fields: Vec<(&str, TypeHandle)>) -> Self {
        let mut handle = Self::new(kind, spelling);
        handle.fields = fields
            .into_iter()
            .map(|(name, ty)| FieldHandle {
                name: name.to_string(),
                ty,
            })
            .collect();
        handle
    }

    pub fn typedef(name: &str, underlying: TypeHandle) -> Self {
        let mut handle = Self::new(TypeKind::Typedef, name);
        handle.canonical = Some(Box::new(underlying));
        handle
    }

    pub fn enum_of(name: &str, integer: TypeHandle) -> Self {
        let mut handle = Self::new(TypeKind::Enum, format!("enum {name}"));
        handle.canonical = Some(Box::new(integer));
        handle
    }

    pub fn constant_array(element: TypeHandle, size: u64) -> Self {
        let mut handle = Self::new(
            TypeKind::ConstantArray,
            format!("{} [{}]", element.spelling, size),
        );
        handle.element = Some(Box::new(element));
        handle.size = Some(size);
        handle
    }

    pub fn declared_at(mut self, filename: impl Into<String>, line: u32) -> Self {
        self.declaration = Some(CursorLocation::new(filename, line));
        self
    }

    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Follow sugar (typedef, elaborated, attributed) down to the first
    /// handle that is not sugar or has no canonical type attached
    pub fn desugared(&self) -> &TypeHandle {
        let mut current = self;
        while current.kind.is_sugar() {
            match current.canonical.as_deref() {
                Some(next) => current = next,
                None => break,
            }
        }
        current
    }

    /// Block or function pointer signature, looking through sugar
    pub fn callable(&self) -> Option<Callable<'_>> {
        let target = self.desugared();
        let kind = match target.kind {
            TypeKind::BlockPointer => CallableKind::Block,
            TypeKind::Pointer => {
                let pointee = target.pointee.as_deref()?.desugared();
                if !pointee.kind.is_function() {
                    return None;
                }
                CallableKind::FunctionPointer
            }
            _ => return None,
        };

        let proto = target.pointee.as_deref().map(TypeHandle::desugared);
        Some(Callable {
            kind,
            handle: self,
            result: proto.and_then(|p| p.result.as_deref()),
            arguments: proto.map(|p| p.arguments.as_slice()).unwrap_or(&[]),
            variadic: proto.map_or(false, |p| p.variadic),
        })
    }
}

fn block_spelling(proto: &TypeHandle, marker: &str) -> String {
    let result = proto
        .result
        .as_deref()
        .map(|r| r.spelling.as_str())
        .unwrap_or("void");
    let args = proto
        .arguments
        .iter()
        .map(|a| a.spelling.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{result} ({marker})({args})")
}

/*
 * Type Resolver - handle/encoding → {type, value, encoding}
 *
 * Resolution order:
 * - primitives, pointers and Objective-C object kinds map directly
 * - typedef / elaborated / attributed sugar → canonical type (value keeps
 *   the sugared spelling), registry typedef when no canonical is attached
 * - blocks and function pointers → synthesized `@?<...>` / `^?<...>`
 * - structs and unions → synthesized `{Name=...}` / `(Name=...)`
 * - unexposed / dependent / invalid → declaration encoding hint
 *
 * Never fails: irreducible types come back as `unknown` / `?`.
 */

use ahash::AHashSet;
use lazy_static::lazy_static;
use tracing::{debug, trace};

use crate::features::parsing::domain::{Callable, CallableKind, CursorLocation, TypeHandle, TypeKind};
use crate::features::type_resolution::domain::{
    aggregate_encoding, encoding_to_type, filter_encoding, needs_resolving, strip_template_args,
    AggregateKind,
};
use crate::features::type_resolution::ports::TypeLookup;
use crate::shared::models::Type;
use crate::shared::utils::{aggregate_name, is_anonymous_name};

lazy_static! {
    /// Primitive kind → (type name, encoding). `long` is 64-bit (LP64).
    static ref PRIMITIVES: Vec<(TypeKind, &'static str, &'static str)> = vec![
        (TypeKind::Void, "void", "v"),
        (TypeKind::Bool, "bool", "B"),
        (TypeKind::CharS, "char", "c"),
        (TypeKind::SChar, "char", "c"),
        (TypeKind::CharU, "uchar", "C"),
        (TypeKind::UChar, "uchar", "C"),
        (TypeKind::Char16, "ushort", "S"),
        (TypeKind::Char32, "uint", "I"),
        (TypeKind::WChar, "int", "i"),
        (TypeKind::Short, "short", "s"),
        (TypeKind::UShort, "ushort", "S"),
        (TypeKind::Int, "int", "i"),
        (TypeKind::UInt, "uint", "I"),
        (TypeKind::Long, "long", "q"),
        (TypeKind::ULong, "ulong", "Q"),
        (TypeKind::LongLong, "long_long", "q"),
        (TypeKind::ULongLong, "ulong_long", "Q"),
        (TypeKind::Int128, "int128", "t"),
        (TypeKind::UInt128, "uint128", "T"),
        (TypeKind::Float, "float", "f"),
        (TypeKind::Double, "double", "d"),
        (TypeKind::LongDouble, "long_double", "D"),
    ];
}

fn primitive(kind: &TypeKind) -> Option<(&'static str, &'static str)> {
    PRIMITIVES
        .iter()
        .find(|(k, _, _)| k == kind)
        .map(|(_, name, encoding)| (*name, *encoding))
}

/// Position of the handle being resolved relative to enclosing pointers and
/// records. Records are expanded at top level, behind one pointer outside a
/// record, and as direct fields; anything deeper gets the named `{Name}`
/// form.
#[derive(Debug, Clone, Copy, Default)]
struct Scope {
    pointer_depth: u8,
    in_aggregate: bool,
}

impl Scope {
    fn member() -> Self {
        Self {
            pointer_depth: 0,
            in_aggregate: true,
        }
    }

    fn behind_pointer(self) -> Self {
        Self {
            pointer_depth: self.pointer_depth.saturating_add(1),
            ..self
        }
    }

    fn expands_aggregates(&self) -> bool {
        self.pointer_depth == 0 || (self.pointer_depth == 1 && !self.in_aggregate)
    }
}

/// Resolver for one declaration
///
/// Collects the declaration locations of every named type it meets so the
/// caller can record framework dependencies.
pub struct TypeResolver<'a> {
    lookup: &'a dyn TypeLookup,
    visiting: AHashSet<String>,
    references: Vec<CursorLocation>,
}

impl<'a> TypeResolver<'a> {
    pub fn new(lookup: &'a dyn TypeLookup) -> Self {
        Self {
            lookup,
            visiting: AHashSet::new(),
            references: Vec::new(),
        }
    }

    /// Resolve a declaration's type. `hint` is the declaration's runtime
    /// encoding, used when the handle itself is opaque.
    pub fn resolve(&mut self, handle: &TypeHandle, hint: Option<&str>) -> Type {
        self.resolve_in(handle, hint, Scope::default())
    }

    /// Resolve the type of a struct/union field
    pub fn resolve_member(&mut self, handle: &TypeHandle, hint: Option<&str>) -> Type {
        self.resolve_in(handle, hint, Scope::member())
    }

    /// Type for a bare runtime encoding (method arguments without handles)
    pub fn resolve_encoding(&self, encoding: &str) -> Type {
        if needs_resolving(encoding) {
            return Type::unknown(encoding);
        }
        let filtered = filter_encoding(encoding);
        Type::new(encoding_to_type(&filtered), encoding, filtered)
    }

    /// Signature encoding of a block or function pointer, without the
    /// `@?<...>` / `^?<...>` wrapper: `v@?B` for `void (^)(BOOL)`
    pub fn signature_encoding(&mut self, callable: &Callable<'_>) -> String {
        let mut signature = match callable.result {
            Some(result) => filter_encoding(&self.resolve(result, None).encoding),
            None => "v".to_string(),
        };
        if callable.kind == CallableKind::Block {
            signature.push_str("@?");
        }
        for argument in callable.arguments {
            let encoding = self.resolve(argument, None).encoding;
            signature.push_str(&filter_encoding(&encoding));
        }
        signature
    }

    /// Declaration locations met so far, in encounter order
    pub fn references(&self) -> &[CursorLocation] {
        &self.references
    }

    pub fn into_references(self) -> Vec<CursorLocation> {
        self.references
    }

    fn resolve_in(&mut self, handle: &TypeHandle, hint: Option<&str>, scope: Scope) -> Type {
        if let Some(location) = &handle.declaration {
            self.references.push(location.clone());
        }

        if let Some((name, encoding)) = primitive(&handle.kind) {
            return Type::new(name, spelling_or(handle, name), encoding);
        }

        match &handle.kind {
            TypeKind::Pointer => self.resolve_pointer(handle, hint, scope),
            TypeKind::BlockPointer => self.resolve_callable(handle, hint, scope),
            TypeKind::ObjCId => Type::new("id", spelling_or(handle, "id"), "@"),
            TypeKind::ObjCClass => Type::new("class", spelling_or(handle, "Class"), "#"),
            TypeKind::ObjCSel => Type::new("SEL", spelling_or(handle, "SEL"), ":"),
            TypeKind::ObjCObjectPointer => {
                if let Some(location) = handle.pointee.as_ref().and_then(|p| p.declaration.as_ref()) {
                    self.references.push(location.clone());
                }
                Type::new("objc_pointer", strip_template_args(&handle.spelling), "@")
            }
            TypeKind::ObjCInterface | TypeKind::ObjCObject => {
                Type::new("obj_interface", strip_template_args(&handle.spelling), "@")
            }
            TypeKind::ObjCTypeParam => Type::new("id", strip_template_args(&handle.spelling), "@"),
            TypeKind::Typedef | TypeKind::Elaborated | TypeKind::Attributed => {
                self.resolve_sugar(handle, hint, scope)
            }
            TypeKind::Enum => {
                let encoding = match handle.canonical.as_deref() {
                    Some(integer) => self.resolve_in(integer, None, scope).encoding,
                    None => "i".to_string(),
                };
                Type::new("enum", &handle.spelling, encoding)
            }
            TypeKind::Struct => self.resolve_aggregate(handle, AggregateKind::Struct, scope),
            TypeKind::Union => self.resolve_aggregate(handle, AggregateKind::Union, scope),
            TypeKind::ConstantArray => match handle.element.as_deref() {
                Some(element) => {
                    let element = self.resolve_in(element, None, scope);
                    let size = handle.size.unwrap_or(0);
                    Type::new(
                        "constant_array",
                        &handle.spelling,
                        format!("[{size}{}]", element.encoding),
                    )
                }
                None => self.resolve_opaque(handle, hint, scope),
            },
            TypeKind::IncompleteArray => match handle.element.as_deref() {
                Some(element) => {
                    let element = self.resolve_in(element, None, scope.behind_pointer());
                    Type::new(
                        "incomplete_array",
                        &handle.spelling,
                        format!("^{}", element.encoding),
                    )
                }
                None => self.resolve_opaque(handle, hint, scope),
            },
            TypeKind::FunctionProto | TypeKind::FunctionNoProto => {
                Type::new("function", &handle.spelling, "?")
            }
            _ => self.resolve_opaque(handle, hint, scope),
        }
    }

    fn resolve_pointer(&mut self, handle: &TypeHandle, hint: Option<&str>, scope: Scope) -> Type {
        let Some(pointee) = handle.pointee.as_deref() else {
            return self.resolve_opaque(handle, hint, scope);
        };
        let target = pointee.desugared();
        if target.kind.is_char() {
            return Type::new("pointer", &handle.spelling, "*");
        }
        if target.kind.is_function() {
            return self.resolve_callable(handle, hint, scope);
        }
        let inner = self.resolve_in(pointee, None, scope.behind_pointer());
        Type::new("pointer", &handle.spelling, format!("^{}", inner.encoding))
    }

    fn resolve_callable(&mut self, handle: &TypeHandle, hint: Option<&str>, scope: Scope) -> Type {
        let Some(callable) = handle.callable() else {
            if handle.kind == TypeKind::BlockPointer {
                return Type::new("block", &handle.spelling, "@?");
            }
            return self.resolve_opaque(handle, hint, scope);
        };
        let signature = self.signature_encoding(&callable);
        let (type_name, prefix) = match callable.kind {
            CallableKind::Block => ("block", "@?"),
            CallableKind::FunctionPointer => ("function_callback", "^?"),
        };
        Type::new(type_name, &handle.spelling, format!("{prefix}<{signature}>"))
    }

    fn resolve_sugar(&mut self, handle: &TypeHandle, hint: Option<&str>, scope: Scope) -> Type {
        if let Some(canonical) = handle.canonical.as_deref() {
            // `typedef struct { ... } Name;` encodes as `{Name=...}`
            if let Some(kind) = anonymous_aggregate(canonical) {
                let name = aggregate_name(&handle.spelling);
                return self
                    .expand_aggregate(canonical, kind, name, scope)
                    .with_value(&handle.spelling);
            }
            return self
                .resolve_in(canonical, hint, scope)
                .with_value(&handle.spelling);
        }

        if handle.kind == TypeKind::Typedef {
            let name = aggregate_name(&handle.spelling);
            if let Some(aliased) = self.lookup.typedef_type(&name) {
                trace!(typedef = %name, "resolved through registered typedef");
                return aliased.with_value(&handle.spelling);
            }
        }

        // `struct Foo` without a canonical handle: named record
        if handle.kind == TypeKind::Elaborated {
            let spelling = handle.spelling.trim_start_matches("const ").trim_start();
            if spelling.starts_with("struct ") {
                return self.resolve_aggregate(handle, AggregateKind::Struct, scope);
            }
            if spelling.starts_with("union ") {
                return self.resolve_aggregate(handle, AggregateKind::Union, scope);
            }
        }

        self.resolve_opaque(handle, hint, scope)
    }

    fn resolve_aggregate(&mut self, handle: &TypeHandle, kind: AggregateKind, scope: Scope) -> Type {
        let name = aggregate_name(&handle.spelling);
        let name = if is_anonymous_name(&name) {
            "?".to_string()
        } else {
            name
        };
        self.expand_aggregate(handle, kind, name, scope)
    }

    fn expand_aggregate(
        &mut self,
        handle: &TypeHandle,
        kind: AggregateKind,
        name: String,
        scope: Scope,
    ) -> Type {
        let (open, close) = kind.delimiters();
        let key = format!("{} {}", kind.as_str(), name);

        if !scope.expands_aggregates() || self.visiting.contains(&key) {
            return Type::new(
                kind.as_str(),
                &handle.spelling,
                aggregate_encoding(open, close, &name, None),
            );
        }

        let members = if handle.fields.is_empty() {
            self.lookup.aggregate_members(kind, &name)
        } else {
            self.visiting.insert(key.clone());
            let encodings = handle
                .fields
                .iter()
                .map(|field| self.resolve_in(&field.ty, None, Scope::member()).encoding)
                .collect::<Vec<_>>();
            self.visiting.remove(&key);
            Some(encodings)
        };

        let members: Option<Vec<&str>> = members
            .as_ref()
            .map(|m| m.iter().map(String::as_str).collect());
        Type::new(
            kind.as_str(),
            &handle.spelling,
            aggregate_encoding(open, close, &name, members.as_deref()),
        )
    }

    /// Unexposed, dependent or otherwise opaque handles
    fn resolve_opaque(&mut self, handle: &TypeHandle, hint: Option<&str>, scope: Scope) -> Type {
        let value = strip_template_args(&handle.spelling);

        if let Some(hint) = hint.filter(|h| !needs_resolving(h)) {
            let encoding = filter_encoding(hint);
            return Type::new(encoding_to_type(&encoding), value, encoding);
        }

        if let Some(canonical) = handle.canonical.as_deref() {
            return self.resolve_in(canonical, None, scope).with_value(value);
        }

        debug!(kind = %handle.kind, spelling = %handle.spelling, "unresolvable type");
        Type::unknown(value)
    }
}

/// Unnamed struct/union handle (after sugar)
fn anonymous_aggregate(handle: &TypeHandle) -> Option<AggregateKind> {
    let target = handle.desugared();
    let kind = match target.kind {
        TypeKind::Struct => AggregateKind::Struct,
        TypeKind::Union => AggregateKind::Union,
        _ => return None,
    };
    is_anonymous_name(&aggregate_name(&target.spelling)).then_some(kind)
}

fn spelling_or<'h>(handle: &'h TypeHandle, fallback: &'h str) -> &'h str {
    if handle.spelling.is_empty() {
        fallback
    } else {
        &handle.spelling
    }
}

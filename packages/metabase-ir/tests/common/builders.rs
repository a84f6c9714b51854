//! Builders for cursor trees and type handles

use metabase_ir::features::parsing::domain::Availability;
use metabase_ir::{CursorKind, CursorNode, TypeHandle, TypeKind};

// ═══════════════════════════════════════════════════════════════
// Type handles
// ═══════════════════════════════════════════════════════════════

pub fn void() -> TypeHandle {
    TypeHandle::new(TypeKind::Void, "void")
}

pub fn int() -> TypeHandle {
    TypeHandle::new(TypeKind::Int, "int")
}

pub fn float() -> TypeHandle {
    TypeHandle::new(TypeKind::Float, "float")
}

pub fn double() -> TypeHandle {
    TypeHandle::new(TypeKind::Double, "double")
}

/// `BOOL` on 64-bit targets
pub fn objc_bool() -> TypeHandle {
    TypeHandle::typedef("BOOL", TypeHandle::new(TypeKind::Bool, "bool"))
}

pub fn ns_integer() -> TypeHandle {
    TypeHandle::typedef("NSInteger", TypeHandle::new(TypeKind::Long, "long"))
}

pub fn object(class_name: &str) -> TypeHandle {
    TypeHandle::object_pointer(class_name)
}

pub fn block(result: TypeHandle, arguments: Vec<TypeHandle>) -> TypeHandle {
    TypeHandle::block(result, arguments)
}

/// `CGRect` as the front end reports it: typedef over a named record
pub fn cg_rect() -> TypeHandle {
    let point = TypeHandle::struct_of("CGPoint", vec![("x", double()), ("y", double())]);
    let size = TypeHandle::struct_of("CGSize", vec![("width", double()), ("height", double())]);
    TypeHandle::typedef(
        "CGRect",
        TypeHandle::struct_of("CGRect", vec![("origin", point), ("size", size)]),
    )
}

pub fn anonymous_struct(fields: Vec<(&str, TypeHandle)>) -> TypeHandle {
    TypeHandle::record_named(TypeKind::Struct, "struct (anonymous at geometry.h:3:9)", fields)
}

// ═══════════════════════════════════════════════════════════════
// Cursors
// ═══════════════════════════════════════════════════════════════

pub fn interface(name: &str, header: &str, line: u32) -> CursorNode {
    CursorNode::new(CursorKind::ObjCInterfaceDecl, name).at(header, line)
}

pub fn protocol(name: &str, header: &str, line: u32) -> CursorNode {
    CursorNode::new(CursorKind::ObjCProtocolDecl, name).at(header, line)
}

pub fn category(name: &str, class_name: &str, header: &str) -> CursorNode {
    CursorNode::new(CursorKind::ObjCCategoryDecl, name)
        .at(header, 1)
        .with_child(CursorNode::new(CursorKind::ObjCClassRef, class_name))
}

pub fn superclass(name: &str, header: &str) -> CursorNode {
    CursorNode::new(CursorKind::ObjCSuperClassRef, name).referencing(header, 1)
}

pub fn protocol_ref(name: &str, header: &str) -> CursorNode {
    CursorNode::new(CursorKind::ObjCProtocolRef, name).referencing(header, 1)
}

pub fn instance_method(selector: &str, encoding: &str) -> CursorNode {
    CursorNode::new(CursorKind::ObjCInstanceMethodDecl, selector).with_encoding(encoding)
}

pub fn class_method(selector: &str, encoding: &str) -> CursorNode {
    CursorNode::new(CursorKind::ObjCClassMethodDecl, selector).with_encoding(encoding)
}

pub fn param(name: &str, ty: TypeHandle) -> CursorNode {
    CursorNode::new(CursorKind::ParmDecl, name).with_type(ty)
}

pub fn property(name: &str, ty: TypeHandle) -> CursorNode {
    CursorNode::new(CursorKind::ObjCPropertyDecl, name).with_type(ty)
}

pub fn field(name: &str, ty: TypeHandle) -> CursorNode {
    CursorNode::new(CursorKind::FieldDecl, name).with_type(ty)
}

pub fn struct_decl(name: &str, fields: Vec<CursorNode>) -> CursorNode {
    CursorNode::new(CursorKind::StructDecl, name).with_children(fields)
}

pub fn union_decl(name: &str, fields: Vec<CursorNode>) -> CursorNode {
    CursorNode::new(CursorKind::UnionDecl, name).with_children(fields)
}

pub fn typedef_decl(name: &str, aliased: TypeHandle) -> CursorNode {
    CursorNode::new(CursorKind::TypedefDecl, name).with_type(aliased)
}

pub fn enum_decl(name: &str, integer: TypeHandle, cases: &[(&str, i64)]) -> CursorNode {
    let constants = cases
        .iter()
        .map(|(case, value)| CursorNode::new(CursorKind::EnumConstantDecl, *case).with_value(*value))
        .collect();
    CursorNode::new(CursorKind::EnumDecl, name)
        .with_type(integer)
        .with_children(constants)
}

pub fn var_decl(name: &str, ty: TypeHandle) -> CursorNode {
    CursorNode::new(CursorKind::VarDecl, name).with_type(ty)
}

pub fn function_decl(name: &str, result: TypeHandle, params: Vec<CursorNode>) -> CursorNode {
    CursorNode::new(CursorKind::FunctionDecl, name)
        .with_result_type(result)
        .with_children(params)
}

pub fn extern_c(children: Vec<CursorNode>) -> CursorNode {
    CursorNode::new(CursorKind::LinkageSpec, "").with_children(children)
}

pub fn obsoleted(version: &str) -> Availability {
    Availability {
        obsoleted: Some(version.to_string()),
        ..Availability::default()
    }
}

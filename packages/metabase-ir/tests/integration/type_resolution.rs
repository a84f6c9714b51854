//! Type resolution through the full traversal

#[path = "../common/mod.rs"]
mod common;

use common::*;
use metabase_ir::features::parsing::domain::CursorLocation;
use metabase_ir::features::type_resolution::domain::method_argument_encodings;
use metabase_ir::features::type_resolution::NoLookup;
use metabase_ir::{parse, ParserContext, TypeHandle, TypeKind, TypeResolver};
use pretty_assertions::assert_eq;

#[test]
fn test_same_handle_resolves_identically() {
    let handle = block(objc_bool(), vec![object("NSError"), cg_rect()]);
    let mut ctx = ParserContext::new(fixture_config());
    let first = ctx.resolve(&handle, None);
    let second = ctx.resolve(&handle, None);
    assert_eq!(first, second);
    assert_eq!(first.encoding, "@?<B@?@{CGRect={CGPoint=dd}{CGSize=dd}}>");
}

#[test]
fn test_struct_declaration_matches_direct_resolution() {
    let root = translation_unit(vec![struct_decl(
        "Point",
        vec![field("x", int()), field("y", float())],
    )
    .at(user_header("Point.h"), 1)]);
    let mut ctx = parse(&root, fixture_config());

    let declared = ctx.tree().get_struct("Point").unwrap().encoding.clone();
    assert_eq!(declared, "{Point=if}");

    let direct = TypeHandle::struct_of("Point", vec![("x", int()), ("y", float())]);
    assert_eq!(ctx.resolve(&direct, None).encoding, declared);

    // A bare reference finds the members through the registry
    let bare = TypeHandle::new(TypeKind::Struct, "struct Point");
    assert_eq!(ctx.resolve(&bare, None).encoding, declared);
}

#[test]
fn test_unexposed_handle_uses_declaration_encoding() {
    let root = translation_unit(vec![var_decl(
        "kContext",
        TypeHandle::new(TypeKind::Unexposed, "__kindof NSObject<Proto> *"),
    )
    .with_encoding("^v")
    .at(user_header("Context.h"), 1)]);
    let ctx = parse(&root, fixture_config());

    let var = ctx.tree().get_var("kContext").unwrap();
    assert_type(&var.ty, "pointer", "^v");
    assert!(!var.ty.type_name.is_empty());
    assert_eq!(var.ty.value, "__kindof NSObject *");
}

#[test]
fn test_irreducible_type_is_unknown() {
    let root = translation_unit(vec![var_decl(
        "kValue",
        TypeHandle::new(TypeKind::Dependent, "ObjectType"),
    )
    .at(user_header("Generic.h"), 1)]);
    let ctx = parse(&root, fixture_config());
    assert_type(&ctx.tree().get_var("kValue").unwrap().ty, "unknown", "?");
}

#[test]
fn test_self_referential_struct() {
    let node_ptr = TypeHandle::pointer_to(TypeHandle::new(TypeKind::Struct, "struct Node"));
    let root = translation_unit(vec![struct_decl(
        "Node",
        vec![field("next", node_ptr), field("v", int())],
    )
    .at(user_header("List.h"), 1)]);
    let ctx = parse(&root, fixture_config());
    assert_eq!(ctx.tree().get_struct("Node").unwrap().encoding, "{Node=^{Node}i}");
}

#[test]
fn test_mutually_recursive_structs_terminate() {
    // struct A { struct B b; }; struct B { struct A *a; };
    let a_ptr = TypeHandle::pointer_to(TypeHandle::new(TypeKind::Struct, "struct A"));
    let b = TypeHandle::struct_of("B", vec![("a", a_ptr)]);
    let a = TypeHandle::struct_of("A", vec![("b", b)]);
    let ty = TypeResolver::new(&NoLookup).resolve(&a, None);
    assert_eq!(ty.encoding, "{A={B=^{A}}}");
}

#[test]
fn test_method_argument_encodings() {
    assert_eq!(method_argument_encodings("v24@0:8@16B24"), vec!["@", "B"]);
}

#[test]
fn test_typedef_resolves_through_registry() {
    let header = user_header("Types.h");
    let root = translation_unit(vec![
        typedef_decl("MKIdentifier", TypeHandle::new(TypeKind::ULongLong, "unsigned long long"))
            .at(header.clone(), 1),
        // The front end did not attach the canonical type here
        var_decl("kInvalidIdentifier", TypeHandle::new(TypeKind::Typedef, "MKIdentifier"))
            .at(header, 2),
    ]);
    let ctx = parse(&root, fixture_config());

    let var = ctx.tree().get_var("kInvalidIdentifier").unwrap();
    assert_type(&var.ty, "ulong_long", "Q");
    assert_eq!(var.ty.value, "MKIdentifier");
}

#[test]
fn test_block_typedef_registers_block() {
    let header = user_header("Handlers.h");
    let handler = block(void(), vec![objc_bool(), object("NSError")]);
    let root = translation_unit(vec![
        typedef_decl("MKCompletion", handler.clone()).at(header.clone(), 1),
        interface("Loader", &header, 5).with_child(
            instance_method("load:", "v24@0:8@?16")
                .with_child(param("completion", TypeHandle::typedef("MKCompletion", handler))),
        ),
    ]);
    let ctx = parse(&root, fixture_config());

    let tree = ctx.tree();
    assert_type(&tree.get_type("MKCompletion").unwrap().ty, "block", "@?<v@?B@>");

    let block = tree.get_block(FRAMEWORK, "void (^)(BOOL, NSError *)").unwrap();
    assert_eq!(block.encoding, "v@?B@");
    assert_eq!(block.arguments.len(), 2);
    assert_eq!(tree.blocks().len(), 1);

    let load = tree.get_class("Loader").unwrap().method("load:").unwrap();
    let argument = &load.arguments[0];
    assert_eq!(argument.ty.value, "MKCompletion");
    assert_eq!(argument.block.as_ref().unwrap().signature, "void (^)(BOOL, NSError *)");
}

#[test]
fn test_function_pointer_field() {
    let callback = TypeHandle::function_pointer(int(), vec![TypeHandle::pointer_to(void())]);
    let root = translation_unit(vec![struct_decl(
        "MKCallbacks",
        vec![field("retain", callback), field("info", TypeHandle::pointer_to(void()))],
    )
    .at(user_header("Callbacks.h"), 1)]);
    let ctx = parse(&root, fixture_config());

    let callbacks = ctx.tree().get_struct("MKCallbacks").unwrap();
    assert_type(&callbacks.fields[0].ty, "function_callback", "^?<i^v>");
    assert_eq!(callbacks.encoding, "{MKCallbacks=^?<i^v>^v}");
    assert!(ctx.tree().blocks().is_empty());
}

#[test]
fn test_type_declaration_adds_dependency() {
    let cgfloat = TypeHandle::typedef("CGFloat", double())
        .declared_at(vendor_header("Geometry", "Geometry.h"), 4);
    let mut ctx = ParserContext::new(fixture_config());
    assert_type(&ctx.resolve(&cgfloat, None), "double", "d");
    assert_dependencies(&ctx, &["Geometry"]);

    ctx.note_reference(Some(&CursorLocation::new(user_header("Local.h"), 1)));
    assert_dependencies(&ctx, &["Geometry"]);
}

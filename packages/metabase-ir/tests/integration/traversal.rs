//! Traversal tests: dispatch, registration and the duplicate policy

#[path = "../common/mod.rs"]
mod common;

use common::*;
use metabase_ir::{parse, CursorKind, CursorNode, DefinitionKind, TypeHandle, TypeKind};
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════
// Registration
// ═══════════════════════════════════════════════════════════════

#[test]
fn test_registered_class_is_found() {
    let root = translation_unit(vec![fixture_nsobject()]);
    let ctx = parse(&root, fixture_config());

    let tree = ctx.tree();
    assert!(tree.has_class("NSObject"));
    let class = tree.get_class("NSObject").unwrap();
    assert_eq!(class.base.name, "NSObject");
    assert_eq!(class.base.kind, DefinitionKind::Class);
    assert!(std::ptr::eq(class, tree.classes().get("NSObject").unwrap()));
}

#[test]
fn test_method_count_preserved() {
    let root = translation_unit(vec![fixture_widget(25)]);
    let ctx = parse(&root, fixture_config());
    assert_method_count(&ctx, "Widget", 25);
}

#[test]
fn test_overloaded_selectors_are_all_kept() {
    // Same selector as class and instance method
    let root = translation_unit(vec![interface("Color", &user_header("Color.h"), 1)
        .with_child(class_method("description", "@16@0:8"))
        .with_child(instance_method("description", "@16@0:8"))]);
    let ctx = parse(&root, fixture_config());
    assert_method_count(&ctx, "Color", 2);
}

#[test]
fn test_interface_members() {
    let root = translation_unit(vec![interface("Widget", &user_header("Widget.h"), 3)
        .with_child(superclass("UIView", &sdk_header("UIKit", "UIView.h")))
        .with_child(
            property("title", object("NSString")).with_attributes(["copy", "nonatomic"]),
        )
        .with_child(
            instance_method("initWithFrame:style:", "@40@0:8{CGRect={CGPoint=dd}{CGSize=dd}}16q32")
                .with_child(param("frame", cg_rect()))
                .with_child(param("style", ns_integer())),
        )]);
    let ctx = parse(&root, fixture_config());

    let widget = ctx.tree().get_class("Widget").unwrap();
    assert_eq!(widget.superclass.as_deref(), Some("UIView"));
    assert_eq!(widget.property("title").unwrap().ty.encoding, "@");

    let init = widget.method("initWithFrame:style:").unwrap();
    assert_eq!(init.name, "initWithFrameStyle");
    assert_eq!(init.arguments[0].ty.encoding, "{CGRect={CGPoint=dd}{CGSize=dd}}");
    assert_eq!(init.arguments[1].ty.encoding, "q");
    assert_eq!(init.arguments[1].ty.value, "NSInteger");
}

#[test]
fn test_protocol_registered() {
    let root = translation_unit(vec![protocol("WidgetDelegate", &user_header("Widget.h"), 40)
        .with_child(protocol_ref("NSObject", &sdk_header("Foundation", "NSObject.h")))
        .with_child(instance_method("widgetDidLoad:", "v24@0:8@16").optional())]);
    let ctx = parse(&root, fixture_config());

    let delegate = ctx.tree().get_protocol("WidgetDelegate").unwrap();
    assert_eq!(delegate.base.kind, DefinitionKind::Protocol);
    assert_eq!(delegate.protocols, vec!["NSObject"]);
    assert!(delegate.methods[0].optional);
    assert!(!ctx.tree().has_class("WidgetDelegate"));
}

#[test]
fn test_categories_merge_into_extension() {
    let root = translation_unit(vec![
        category("Layout", "UIView", &user_header("UIView+Layout.h"))
            .with_child(instance_method("layout", "v16@0:8")),
        category("Style", "UIView", &user_header("UIView+Style.h"))
            .with_child(instance_method("applyStyle", "v16@0:8")),
    ]);
    let ctx = parse(&root, fixture_config());

    let tree = ctx.tree();
    assert_eq!(tree.extensions().len(), 1);
    let extension = tree.get_extension("UIView").unwrap();
    assert_eq!(extension.categories, vec!["Layout", "Style"]);
    assert_eq!(extension.methods.len(), 2);
    assert!(!tree.has_class("UIView"));
}

// ═══════════════════════════════════════════════════════════════
// Duplicates
// ═══════════════════════════════════════════════════════════════

#[test]
fn test_forward_declaration_then_full() {
    let header = user_header("Node.h");
    let root = translation_unit(vec![
        struct_decl("Node", vec![]).at(header.clone(), 1),
        interface("Widget", &header, 2),
        struct_decl("Node", vec![field("value", int())]).at(header.clone(), 5),
        fixture_widget(1),
    ]);
    let ctx = parse(&root, fixture_config());

    let tree = ctx.tree();
    assert_eq!(tree.get_struct("Node").unwrap().encoding, "{Node=i}");
    assert_eq!(tree.get_class("Widget").unwrap().methods.len(), 1);
}

#[test]
fn test_full_declaration_then_empty() {
    let header = user_header("Node.h");
    let root = translation_unit(vec![
        struct_decl("Node", vec![field("value", int())]).at(header.clone(), 5),
        fixture_widget(2),
        struct_decl("Node", vec![]).at(header.clone(), 9),
        interface("Widget", &header, 20),
    ]);
    let ctx = parse(&root, fixture_config());

    let tree = ctx.tree();
    let node = tree.get_struct("Node").unwrap();
    assert_eq!(node.fields.len(), 1);
    assert_eq!(node.base.location.line, 5);
    assert_eq!(tree.get_class("Widget").unwrap().methods.len(), 2);
}

#[test]
fn test_duplicate_keeps_first_position() {
    let header = user_header("Types.h");
    let root = translation_unit(vec![
        struct_decl("A", vec![]).at(header.clone(), 1),
        struct_decl("B", vec![field("b", int())]).at(header.clone(), 2),
        struct_decl("A", vec![field("a", float())]).at(header.clone(), 3),
    ]);
    let ctx = parse(&root, fixture_config());

    let names: Vec<&str> = ctx.tree().structs().names().collect();
    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(ctx.tree().get_struct("A").unwrap().encoding, "{A=f}");
}

// ═══════════════════════════════════════════════════════════════
// Unnamed and wrapped declarations
// ═══════════════════════════════════════════════════════════════

#[test]
fn test_anonymous_struct_named_by_typedef() {
    let root = translation_unit(fixture_cgpoint());
    let ctx = parse(&root, fixture_config());

    let tree = ctx.tree();
    let point = tree.get_struct("CGPoint").unwrap();
    assert_eq!(point.encoding, "{CGPoint=dd}");
    assert_eq!(point.base.location.line, 20);

    let alias = tree.get_type("CGPoint").unwrap();
    assert_type(&alias.ty, "struct", "{CGPoint=dd}");
    assert_eq!(tree.structs().len(), 1);
}

#[test]
fn test_anonymous_struct_without_typedef_dropped() {
    let header = user_header("Globals.h");
    let root = translation_unit(vec![
        struct_decl("", vec![field("x", int())]).at(header.clone(), 1),
        var_decl("gOrigin", int()).at(header.clone(), 2),
        typedef_decl("Later", anonymous_struct(vec![("x", int())])).at(header, 3),
    ]);
    let ctx = parse(&root, fixture_config());

    let tree = ctx.tree();
    assert!(tree.structs().is_empty());
    assert!(tree.has_var("gOrigin"));
    assert!(tree.has_type("Later"));
}

#[test]
fn test_anonymous_enum_constants_become_vars() {
    let root = translation_unit(vec![enum_decl(
        "",
        TypeHandle::new(TypeKind::UInt, "unsigned int"),
        &[("kOptionA", 1), ("kOptionB", 2)],
    )
    .at(user_header("Options.h"), 1)]);
    let ctx = parse(&root, fixture_config());

    let tree = ctx.tree();
    assert!(tree.enums().is_empty());
    assert_type(&tree.get_var("kOptionB").unwrap().ty, "uint", "I");
}

#[test]
fn test_named_enum() {
    let root = translation_unit(vec![enum_decl(
        "UIViewContentMode",
        ns_integer(),
        &[("ScaleToFill", 0), ("ScaleAspectFit", 1)],
    )
    .at(sdk_header("UIKit", "UIView.h"), 30)]);
    let ctx = parse(&root, fixture_config());

    let mode = ctx.tree().get_enum("UIViewContentMode").unwrap();
    assert_eq!(mode.ty.encoding, "q");
    assert_eq!(mode.value("ScaleAspectFit"), Some(1));
}

#[test]
fn test_block_typed_global_registers_block() {
    let root = translation_unit(vec![
        var_decl("gHandler", block(void(), vec![int()])).at(user_header("Handlers.h"), 4),
    ]);
    let ctx = parse(&root, fixture_config());

    let tree = ctx.tree();
    assert_type(&tree.get_var("gHandler").unwrap().ty, "block", "@?<v@?i>");
    assert_eq!(tree.blocks().len(), 1);
    let handler = tree.get_block(FRAMEWORK, "void (^)(int)").unwrap();
    assert_eq!(handler.encoding, "v@?i");
}

#[test]
fn test_linkage_spec_is_transparent() {
    let header = user_header("Math.h");
    let root = translation_unit(vec![extern_c(vec![
        function_decl("MKAdd", int(), vec![param("a", int()), param("b", int())]).at(header.clone(), 1),
        var_decl("MKVersion", double()).at(header, 2),
    ])]);
    let ctx = parse(&root, fixture_config());

    let tree = ctx.tree();
    assert_eq!(tree.get_function("MKAdd").unwrap().arguments.len(), 2);
    assert!(tree.has_var("MKVersion"));
}

#[test]
fn test_unnamed_and_unavailable_declarations_skipped() {
    let header = user_header("Legacy.h");
    let root = translation_unit(vec![
        function_decl("", void(), vec![]).at(header.clone(), 1),
        interface("OldWidget", &header, 2).with_availability(obsoleted("8.0")),
        interface("Gone", &header, 3).with_availability(obsoleted("9.0")),
        interface("StillHere", &header, 4).with_availability(obsoleted("10.0")),
    ]);
    let ctx = parse(&root, fixture_config());

    let tree = ctx.tree();
    assert!(tree.functions().is_empty());
    assert!(!tree.has_class("OldWidget"));
    assert!(!tree.has_class("Gone"));
    assert!(tree.has_class("StillHere"));
}

#[test]
fn test_unknown_cursor_kinds_ignored() {
    let root = translation_unit(vec![
        CursorNode::new(CursorKind::Other("MacroDefinition".to_string()), "NS_ASSUME_NONNULL_BEGIN"),
        fixture_nsobject(),
    ]);
    let ctx = parse(&root, fixture_config());
    assert_eq!(ctx.tree().len(), 1);
}

#[test]
fn test_traversal_cursor_after_parse() {
    let root = translation_unit(vec![fixture_nsobject(), fixture_widget(0)]);
    let ctx = parse(&root, fixture_config());
    assert!(ctx.current().is_none());
    assert_eq!(ctx.previous().unwrap().name, "Widget");
}

//! Location classification, exclusion and dependency tracking

#[path = "../common/mod.rs"]
mod common;

use common::*;
use metabase_ir::{parse, CursorKind, CursorNode, LocationKind, ParserConfig, TypeHandle, TypeKind};
use pretty_assertions::assert_eq;

#[test]
fn test_superclass_framework_is_a_dependency() {
    let config = ParserConfig::new(SDK, "9.0").framework_name("Bar");
    let root = translation_unit(vec![interface("BarView", &vendor_header("Bar", "BarView.h"), 1)
        .with_child(superclass("FooView", &vendor_header("Foo", "FooView.h")))]);
    let ctx = parse(&root, config);

    assert_dependencies(&ctx, &["Foo"]);
}

#[test]
fn test_dependencies_sorted_and_unique() {
    let root = translation_unit(vec![
        fixture_widget(0),
        interface("Panel", &user_header("Panel.h"), 1)
            .with_child(superclass("UIView", &sdk_header("UIKit", "UIView.h")))
            .with_child(protocol_ref("CALayerDelegate", &sdk_header("QuartzCore", "CALayer.h")))
            .with_child(protocol_ref("NSCoding", &sdk_header("Foundation", "NSObject.h"))),
    ]);
    let ctx = parse(&root, fixture_config());

    assert_dependencies(&ctx, &["Foundation", "QuartzCore", "UIKit"]);
}

#[test]
fn test_non_framework_sdk_headers_are_not_dependencies() {
    let root = translation_unit(vec![var_decl(
        "gBuffer",
        TypeHandle::typedef("size_t", TypeHandle::new(TypeKind::ULong, "unsigned long"))
            .declared_at(sdk_include("stddef.h"), 10),
    )
    .at(user_header("Buffer.h"), 1)]);
    let ctx = parse(&root, fixture_config());
    assert_dependencies(&ctx, &[]);
}

#[test]
fn test_exclude_system_apis() {
    let config = fixture_config().exclude_system_apis(true);
    let root = translation_unit(vec![
        fixture_nsobject(),
        interface("Widget", &user_header("Widget.h"), 1)
            .with_child(superclass("NSObject", &sdk_header("Foundation", "NSObject.h")))
            .with_child(
                instance_method("setOrigin:", "v32@0:8{CGPoint=dd}16")
                    .with_child(param("origin", TypeHandle::typedef(
                        "CGPoint",
                        TypeHandle::struct_of("CGPoint", vec![("x", double()), ("y", double())]),
                    ))),
            ),
        var_decl("NSFoundationVersionNumber", double()).at(sdk_header("Foundation", "NSObjCRuntime.h"), 3),
    ]);
    let ctx = parse(&root, config);

    let tree = ctx.tree();
    assert!(!tree.has_class("NSObject"));
    assert!(!tree.has_var("NSFoundationVersionNumber"));

    let widget = tree.get_class("Widget").unwrap();
    assert_eq!(widget.superclass.as_deref(), Some("NSObject"));
    assert_type(
        &widget.method("setOrigin:").unwrap().arguments[0].ty,
        "struct",
        "{CGPoint=dd}",
    );
    assert_dependencies(&ctx, &["Foundation"]);
}

#[test]
fn test_system_declarations_kept_by_default() {
    let root = translation_unit(vec![fixture_nsobject()]);
    let ctx = parse(&root, fixture_config());

    let nsobject = ctx.tree().get_class("NSObject").unwrap();
    assert_eq!(nsobject.base.location.kind, LocationKind::System);
    assert_eq!(nsobject.base.location.framework, "Foundation");
    assert!(!nsobject.base.thirdparty);
}

#[test]
fn test_framework_filter() {
    let config = fixture_config().framework_filter("UIKit");
    let root = translation_unit(vec![
        fixture_nsobject(),
        interface("UIView", &sdk_header("UIKit", "UIView.h"), 1)
            .with_child(superclass("UIResponder", &sdk_header("UIKit", "UIResponder.h")))
            .with_child(protocol_ref("NSCoding", &sdk_header("Foundation", "NSObject.h"))),
        fixture_widget(1),
    ]);
    let ctx = parse(&root, config);

    let tree = ctx.tree();
    assert!(tree.has_class("UIView"));
    assert!(!tree.has_class("NSObject"));
    assert!(!tree.has_class("Widget"));
    assert_dependencies(&ctx, &["Foundation", "UIKit"]);
}

#[test]
fn test_unresolved_location_is_included() {
    let config = fixture_config().exclude_system_apis(true).framework_filter("UIKit");
    let root = translation_unit(vec![
        CursorNode::new(CursorKind::ObjCInterfaceDecl, "Floating")
            .with_child(instance_method("hover", "v16@0:8")),
    ]);
    let ctx = parse(&root, config);

    let floating = ctx.tree().get_class("Floating").unwrap();
    assert!(floating.base.location.is_unresolved());
    assert_eq!(floating.methods.len(), 1);
}

#[test]
fn test_user_and_vendor_locations() {
    let root = translation_unit(vec![
        fixture_widget(0),
        interface("Analytics", &vendor_header("Tracking", "Analytics.h"), 7),
    ]);
    let ctx = parse(&root, fixture_config());

    let tree = ctx.tree();
    let widget = tree.get_class("Widget").unwrap();
    assert_eq!(widget.base.location.kind, LocationKind::User);
    assert_eq!(widget.base.location.framework, FRAMEWORK);
    assert!(widget.base.thirdparty);

    let analytics = tree.get_class("Analytics").unwrap();
    assert_eq!(analytics.base.location.kind, LocationKind::Framework);
    assert_eq!(analytics.base.location.framework, "Tracking");
    assert_eq!(analytics.base.location.line, 7);
}

//! Test fixtures: header paths, session configs and small translation units

use metabase_ir::{CursorKind, CursorNode, ParserConfig};

use super::builders::*;

pub const SDK: &str = "/SDK/iPhoneSimulator.sdk";
pub const FRAMEWORK: &str = "MyKit";

/// Header of an SDK framework
pub fn sdk_header(framework: &str, file: &str) -> String {
    format!("{SDK}/System/Library/Frameworks/{framework}.framework/Headers/{file}")
}

/// Non-framework SDK header (`/usr/include`)
pub fn sdk_include(file: &str) -> String {
    format!("{SDK}/usr/include/{file}")
}

/// Third-party framework outside the SDK
pub fn vendor_header(framework: &str, file: &str) -> String {
    format!("/Users/dev/Pods/{framework}.framework/Headers/{file}")
}

/// Header of the framework being generated
pub fn user_header(file: &str) -> String {
    format!("/Users/dev/{FRAMEWORK}/Sources/{file}")
}

pub fn fixture_config() -> ParserConfig {
    ParserConfig::new(SDK, "9.0").framework_name(FRAMEWORK)
}

pub fn translation_unit(children: Vec<CursorNode>) -> CursorNode {
    CursorNode::new(CursorKind::TranslationUnit, "main.m").with_children(children)
}

/// `@interface NSObject` in Foundation
pub fn fixture_nsobject() -> CursorNode {
    interface("NSObject", &sdk_header("Foundation", "NSObject.h"), 50)
        .with_child(class_method("alloc", "@16@0:8"))
        .with_child(instance_method("init", "@16@0:8"))
}

/// `@interface Widget : UIView <NSCopying>` with `count` methods
pub fn fixture_widget(count: usize) -> CursorNode {
    let mut widget = interface("Widget", &user_header("Widget.h"), 10)
        .with_child(superclass("UIView", &sdk_header("UIKit", "UIView.h")))
        .with_child(protocol_ref("NSCopying", &sdk_header("Foundation", "NSObject.h")));
    for i in 0..count {
        widget = widget.with_child(instance_method(&format!("action{i}"), "v16@0:8"));
    }
    widget
}

/// `typedef struct { CGFloat x; CGFloat y; } CGPoint;`
pub fn fixture_cgpoint() -> Vec<CursorNode> {
    let header = sdk_header("CoreGraphics", "CGGeometry.h");
    vec![
        struct_decl("", vec![field("x", double()), field("y", double())]).at(header.clone(), 20),
        typedef_decl("CGPoint", anonymous_struct(vec![("x", double()), ("y", double())]))
            .at(header, 23),
    ]
}

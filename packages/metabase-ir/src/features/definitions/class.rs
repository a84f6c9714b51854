//! Classes, categories (extensions) and protocols

use serde::Serialize;
use tracing::debug;

use super::base::{DefinitionBase, DefinitionKind};
use super::member::{IvarDefinition, PropertyDefinition};
use super::method::MethodDefinition;
use crate::features::parsing::domain::{CursorKind, CursorNode};
use crate::pipeline::ParserContext;

/// Class-like definition; `base.kind` tells class, extension and protocol
/// apart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassDefinition {
    #[serde(flatten)]
    pub base: DefinitionBase,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub superclass: Option<String>,

    /// Category names merged into an extension entry
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,

    /// Adopted protocols, in declaration order without duplicates
    pub protocols: Vec<String>,

    pub methods: Vec<MethodDefinition>,

    pub properties: Vec<PropertyDefinition>,

    pub ivars: Vec<IvarDefinition>,
}

impl ClassDefinition {
    pub fn new(base: DefinitionBase) -> Self {
        Self {
            base,
            superclass: None,
            categories: Vec::new(),
            protocols: Vec::new(),
            methods: Vec::new(),
            properties: Vec::new(),
            ivars: Vec::new(),
        }
    }

    /// `@interface Name : Super <Protocols>`
    pub fn interface(node: &CursorNode, ctx: &mut ParserContext) -> Self {
        let base = DefinitionBase::from_cursor(node, &node.name, DefinitionKind::Class, ctx);
        let mut class = Self::new(base);
        class.populate(node, ctx);
        class
    }

    /// `@protocol Name <Protocols>`
    pub fn protocol(node: &CursorNode, ctx: &mut ParserContext) -> Self {
        let base = DefinitionBase::from_cursor(node, &node.name, DefinitionKind::Protocol, ctx);
        let mut protocol = Self::new(base);
        protocol.populate(node, ctx);
        protocol
    }

    /// `@interface Class (Category)`, keyed by the extended class. `None`
    /// when the front end did not report the extended class.
    pub fn category(node: &CursorNode, ctx: &mut ParserContext) -> Option<Self> {
        let Some(class_ref) = node.find_child(&CursorKind::ObjCClassRef) else {
            debug!(category = %node.name, "category without class reference, skipped");
            return None;
        };
        ctx.note_reference(class_ref.referenced.as_ref());

        let base =
            DefinitionBase::from_cursor(node, &class_ref.name, DefinitionKind::Extension, ctx);
        let mut extension = Self::new(base);
        if !node.name.is_empty() {
            extension.categories.push(node.name.clone());
        }
        extension.populate(node, ctx);
        Some(extension)
    }

    fn populate(&mut self, node: &CursorNode, ctx: &mut ParserContext) {
        for child in &node.children {
            match child.kind {
                CursorKind::ObjCSuperClassRef => {
                    self.superclass = Some(child.name.clone());
                    ctx.note_reference(child.referenced.as_ref());
                }
                CursorKind::ObjCProtocolRef => {
                    self.add_protocol(&child.name);
                    ctx.note_reference(child.referenced.as_ref());
                }
                _ if !child.is_available(ctx.min_version()) => {
                    debug!(owner = %self.base.name, member = %child.name, "unavailable member skipped");
                }
                CursorKind::ObjCInstanceMethodDecl | CursorKind::ObjCClassMethodDecl => {
                    let method = MethodDefinition::from_cursor(child, &self.base.name, ctx);
                    self.methods.push(method);
                }
                CursorKind::ObjCPropertyDecl => {
                    self.properties.push(PropertyDefinition::from_cursor(child, ctx));
                }
                CursorKind::ObjCIvarDecl => {
                    self.ivars.push(IvarDefinition::from_cursor(child, ctx));
                }
                _ => {}
            }
        }
    }

    pub fn add_protocol(&mut self, name: &str) {
        if !self.protocols.iter().any(|p| p == name) {
            self.protocols.push(name.to_string());
        }
    }

    /// Merge another category of the same class into this extension
    pub fn merge(&mut self, other: ClassDefinition) {
        for category in other.categories {
            if !self.categories.contains(&category) {
                self.categories.push(category);
            }
        }
        for protocol in &other.protocols {
            self.add_protocol(protocol);
        }
        self.methods.extend(other.methods);
        self.properties.extend(other.properties);
        self.ivars.extend(other.ivars);
    }

    pub fn method(&self, selector: &str) -> Option<&MethodDefinition> {
        self.methods.iter().find(|m| m.selector == selector)
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDefinition> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// A forward declaration (`@class Foo;`) carries none of these
    pub fn has_body(&self) -> bool {
        self.superclass.is_some()
            || !self.protocols.is_empty()
            || !self.methods.is_empty()
            || !self.properties.is_empty()
            || !self.ivars.is_empty()
    }
}

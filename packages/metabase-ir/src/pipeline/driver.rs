/*
 * Traversal driver
 *
 * Single depth-first pass over the translation unit:
 * - transparent wrappers (`extern "C"`, unexposed declarations) are
 *   flattened into the top level
 * - declarations that are unavailable, unnamed or excluded are skipped
 * - every other declaration builds its definition from its own subtree and
 *   registers it through the context
 */

use tracing::{debug, info, trace};

use crate::config::ParserConfig;
use crate::features::definitions::enum_def::{anonymous_constants, is_anonymous_enum};
use crate::features::definitions::{
    AggregateDefinition, ClassDefinition, Definition, DefinitionBase, DefinitionKind,
    DefinitionRef, EnumDefinition, FunctionDefinition, TypeDefinition, VarDefinition,
};
use crate::features::parsing::domain::{CursorKind, CursorNode, TypeKind};
use crate::features::type_resolution::domain::AggregateKind;
use crate::shared::utils::{aggregate_name, is_anonymous_name};

use super::context::ParserContext;

/// Walk `root` and return the populated context
pub fn parse(root: &CursorNode, config: ParserConfig) -> ParserContext {
    let mut ctx = ParserContext::new(config);
    info!(
        sdk = %ctx.config().sdk_path,
        min_version = %ctx.min_version(),
        framework = %ctx.config().framework_name,
        "parsing translation unit"
    );

    visit_children(root, &mut ctx);
    drop_pending_aggregate(&mut ctx);

    let tree = ctx.tree();
    info!(
        classes = tree.classes().len(),
        extensions = tree.extensions().len(),
        protocols = tree.protocols().len(),
        structs = tree.structs().len(),
        functions = tree.functions().len(),
        blocks = tree.blocks().len(),
        dependencies = ctx.dependencies().len(),
        "parse complete"
    );
    ctx
}

fn visit_children(node: &CursorNode, ctx: &mut ParserContext) {
    for child in &node.children {
        visit(child, ctx);
    }
}

fn visit(node: &CursorNode, ctx: &mut ParserContext) {
    if node.kind.is_transparent() {
        return visit_children(node, ctx);
    }

    // An unnamed record is only claimed by the typedef right after it
    if node.kind != CursorKind::TypedefDecl {
        drop_pending_aggregate(ctx);
    }

    if !node.is_available(ctx.min_version()) {
        debug!(kind = %node.kind, name = %node.name, "unavailable, skipped");
        return;
    }

    let location = ctx.classify(node.location.as_ref());
    if ctx.is_excluded(&location) {
        trace!(kind = %node.kind, name = %node.name, "excluded");
        return;
    }

    match node.kind {
        CursorKind::ObjCInterfaceDecl => {
            if let Some(name) = required_name(node) {
                build(ctx, DefinitionKind::Class, name, |ctx| {
                    Some(Definition::Class(ClassDefinition::interface(node, ctx)))
                });
            }
        }
        CursorKind::ObjCProtocolDecl => {
            if let Some(name) = required_name(node) {
                build(ctx, DefinitionKind::Protocol, name, |ctx| {
                    Some(Definition::Protocol(ClassDefinition::protocol(node, ctx)))
                });
            }
        }
        CursorKind::ObjCCategoryDecl => {
            let class = node
                .find_child(&CursorKind::ObjCClassRef)
                .map(|c| c.name.as_str())
                .unwrap_or_default();
            build(ctx, DefinitionKind::Extension, class, |ctx| {
                ClassDefinition::category(node, ctx).map(Definition::Extension)
            });
        }
        CursorKind::StructDecl => visit_aggregate(node, AggregateKind::Struct, ctx),
        CursorKind::UnionDecl => visit_aggregate(node, AggregateKind::Union, ctx),
        CursorKind::EnumDecl => {
            if is_anonymous_enum(node) {
                for var in anonymous_constants(node, ctx) {
                    ctx.register(Definition::Var(var));
                }
            } else {
                build(ctx, DefinitionKind::Enum, &node.name, |ctx| {
                    Some(Definition::Enum(EnumDefinition::from_cursor(node, ctx)))
                });
            }
        }
        CursorKind::FunctionDecl => {
            if let Some(name) = required_name(node) {
                build(ctx, DefinitionKind::Function, name, |ctx| {
                    Some(Definition::Function(FunctionDefinition::from_cursor(node, ctx)))
                });
            }
        }
        CursorKind::VarDecl => {
            if let Some(name) = required_name(node) {
                build(ctx, DefinitionKind::Var, name, |ctx| {
                    Some(Definition::Var(VarDefinition::from_cursor(node, ctx)))
                });
            }
        }
        CursorKind::TypedefDecl => visit_typedef(node, ctx),
        _ => visit_children(node, ctx),
    }
}

/// Track `name` as the current definition while `make` builds it, then
/// register the result
fn build<F>(ctx: &mut ParserContext, kind: DefinitionKind, name: &str, make: F)
where
    F: FnOnce(&mut ParserContext) -> Option<Definition>,
{
    ctx.begin(DefinitionRef::new(kind, name));
    if let Some(definition) = make(ctx) {
        ctx.register(definition);
    }
    ctx.finish();
}

fn required_name(node: &CursorNode) -> Option<&str> {
    if node.name.is_empty() {
        debug!(kind = %node.kind, "unnamed declaration, skipped");
        return None;
    }
    Some(&node.name)
}

fn visit_aggregate(node: &CursorNode, kind: AggregateKind, ctx: &mut ParserContext) {
    let definition_kind = match kind {
        AggregateKind::Struct => DefinitionKind::Struct,
        AggregateKind::Union => DefinitionKind::Union,
    };

    ctx.begin(DefinitionRef::new(definition_kind, &node.name));
    let aggregate = AggregateDefinition::from_cursor(node, kind, ctx);
    if aggregate.is_anonymous() {
        ctx.set_pending_aggregate(aggregate);
    } else {
        ctx.register(aggregate_definition(aggregate));
    }
    ctx.finish();
}

fn aggregate_definition(aggregate: AggregateDefinition) -> Definition {
    match aggregate.aggregate_kind() {
        AggregateKind::Struct => Definition::Struct(aggregate),
        AggregateKind::Union => Definition::Union(aggregate),
    }
}

fn visit_typedef(node: &CursorNode, ctx: &mut ParserContext) {
    let pending = ctx.take_pending_aggregate();
    let Some(name) = required_name(node) else {
        return;
    };

    ctx.begin(DefinitionRef::new(DefinitionKind::Type, name));
    match pending {
        Some(mut aggregate) if aliases_anonymous(node, aggregate.aggregate_kind()) => {
            trace!(typedef = %name, "naming unnamed record");
            aggregate.rename(name);
            let ty = aggregate.as_type();
            ctx.register(aggregate_definition(aggregate));

            let base = DefinitionBase::from_cursor(node, name, DefinitionKind::Type, ctx);
            ctx.register(Definition::Type(TypeDefinition::new(base, ty)));
        }
        pending => {
            if let Some(aggregate) = pending {
                debug!(encoding = %aggregate.encoding, "unnamed record never aliased, dropped");
            }
            let typedef = TypeDefinition::from_cursor(node, ctx);
            ctx.register(Definition::Type(typedef));
        }
    }
    ctx.finish();
}

/// The typedef's aliased type is an unnamed record of `kind` (or the front
/// end did not report the aliased type at all)
fn aliases_anonymous(node: &CursorNode, kind: AggregateKind) -> bool {
    let Some(handle) = &node.ty else {
        return true;
    };
    let target = handle.desugared();
    let expected = match kind {
        AggregateKind::Struct => TypeKind::Struct,
        AggregateKind::Union => TypeKind::Union,
    };
    target.kind == expected && is_anonymous_name(&aggregate_name(&target.spelling))
}

fn drop_pending_aggregate(ctx: &mut ParserContext) {
    if let Some(aggregate) = ctx.take_pending_aggregate() {
        debug!(encoding = %aggregate.encoding, "unnamed record never aliased, dropped");
    }
}

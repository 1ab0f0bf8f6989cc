use crate::context::EmitContext;
use crate::syntax::*;
use autoface_model::{Accessors, Indexer, Property, ReturnTypeHandling, SetAccessor, TypeRef};

/// Shape shared by properties and indexers
struct Accessor<'a> {
    /// `int Count` or `int this[int index]`, including any by-ref prefix
    head: String,
    ty: &'a TypeRef,
    handling: ReturnTypeHandling,
    accessors: Accessors,
    by_ref: bool,
}

pub fn emit_property(property: &Property, receiver: Option<&str>, ctx: &EmitContext) {
    let accessor = Accessor {
        head: format!(
            "{}{} {}",
            by_ref_prefix(property.returns_by_ref, property.returns_by_ref_readonly),
            property.ty,
            property.name
        ),
        ty: &property.ty,
        handling: property.handling,
        accessors: property.accessors,
        by_ref: property.returns_by_ref || property.returns_by_ref_readonly,
    };
    let target = receiver.map(|r| format!("{}.{}", r, property.name));

    emit_accessor(&accessor, property.docs.as_deref(), target.as_deref(), ctx);
}

pub fn emit_indexer(indexer: &Indexer, receiver: Option<&str>, ctx: &EmitContext) {
    let accessor = Accessor {
        head: format!(
            "{}{} this[{}]",
            by_ref_prefix(indexer.returns_by_ref, indexer.returns_by_ref_readonly),
            indexer.ty,
            parameter_list(&indexer.parameters)
        ),
        ty: &indexer.ty,
        handling: indexer.handling,
        accessors: indexer.accessors,
        by_ref: indexer.returns_by_ref || indexer.returns_by_ref_readonly,
    };
    let target = receiver.map(|r| format!("{}[{}]", r, argument_list(&indexer.parameters)));

    emit_accessor(&accessor, indexer.docs.as_deref(), target.as_deref(), ctx);
}

/// `target` is the forwarded access expression, `None` for declaration only
fn emit_accessor(accessor: &Accessor, docs: Option<&str>, target: Option<&str>, ctx: &EmitContext) {
    if accessor.accessors.is_empty() {
        return;
    }
    emit_docs(docs, ctx);

    let Accessors { get, set } = accessor.accessors;
    match (target, get, set) {
        (Some(target), true, None) => emit_getter(accessor, target, ctx),
        (Some(target), true, Some(SetAccessor::Set)) => {
            ctx.add_line(&accessor.head);
            ctx.open_block();
            ctx.add_line(&format!("get => {};", target));
            ctx.add_line(&format!("set => {} = value;", target));
            ctx.close_block();
        }
        // Set-only and init accessors stay declarations
        _ => ctx.add_line(&format!(
            "{} {{ {}}}",
            accessor.head,
            accessor_list(accessor.accessors)
        )),
    }
}

fn emit_getter(accessor: &Accessor, target: &str, ctx: &EmitContext) {
    match accessor.handling {
        ReturnTypeHandling::CustomTask => {
            ctx.add_line(&accessor.head);
            ctx.open_block();
            ctx.add_line("get");
            ctx.open_block();
            ctx.add_line(&format!("async {} Forward()", accessor.ty));
            ctx.open_block();
            ctx.add_line(&format!("await {};", target));
            ctx.add_line("return default;");
            ctx.close_block();
            ctx.blank_line();
            ctx.add_line("return Forward();");
            ctx.close_block();
            ctx.close_block();
        }
        ReturnTypeHandling::Normal | ReturnTypeHandling::Custom => {
            let by_ref = if accessor.by_ref { "ref " } else { "" };
            ctx.add_line(&format!("{} => {}{};", accessor.head, by_ref, target));
        }
    }
}

/// `get; set; ` style list, each entry followed by a space
fn accessor_list(accessors: Accessors) -> String {
    let mut list = String::new();
    if accessors.get {
        list.push_str("get; ");
    }
    match accessors.set {
        Some(SetAccessor::Set) => list.push_str("set; "),
        Some(SetAccessor::Init) => list.push_str("init; "),
        None => {}
    }
    list
}

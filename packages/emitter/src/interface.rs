use crate::context::{EmitContext, EmitOptions};
use crate::method::emit_method;
use crate::property::{emit_indexer, emit_property};
use crate::syntax::*;
use autoface_model::*;
use tracing::debug;

/// Render a classified model as a complete C# source file
pub fn emit(model: &InterfaceModel) -> String {
    emit_with(model, EmitOptions::default())
}

pub fn emit_with(model: &InterfaceModel, options: EmitOptions) -> String {
    let ctx = EmitContext::new(options);

    emit_header(model, &ctx);

    if let Some(partial) = &model.partial_type {
        emit_partial_type(partial, &model.target, &ctx);
        ctx.blank_line();
    }

    emit_docs(model.target.docs.as_deref(), &ctx);
    ctx.add_line(&interface_declaration(&model.target));
    ctx.open_block();

    let receiver = model.implement.then_some(model.source.receiver.as_str());
    let mut sections = Vec::new();

    if let Some(forwarding) = &model.forwarding {
        let section = ctx.with_new_buffer();
        emit_forwarding_property(forwarding, &section);
        sections.push(section);
    }

    for member in &model.members {
        let section = ctx.with_new_buffer();
        emit_member(member, receiver, &section);
        if section.is_empty() {
            debug!(member = %member.key().name, "Member produced no text");
            continue;
        }
        sections.push(section);
    }

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            ctx.blank_line();
        }
        ctx.merge_buffer(section);
    }

    ctx.close_block();
    ctx.get_output()
}

/// Dispatch on the classified member variant
pub fn emit_member(member: &ClassifiedMember, receiver: Option<&str>, ctx: &EmitContext) {
    match member {
        ClassifiedMember::Method(method) => emit_method(method, receiver, ctx),
        ClassifiedMember::Property(property) => emit_property(property, receiver, ctx),
        ClassifiedMember::Indexer(indexer) => emit_indexer(indexer, receiver, ctx),
    }
}

fn emit_header(model: &InterfaceModel, ctx: &EmitContext) {
    if ctx.options.nullable_directive {
        ctx.add_line("#nullable enable");
        ctx.blank_line();
    }

    if !model.namespaces.is_empty() {
        for namespace in &model.namespaces {
            ctx.add_line(&format!("using {};", namespace));
        }
        ctx.blank_line();
    }

    if let Some(namespace) = &model.target.namespace {
        ctx.add_line(&format!("namespace {};", namespace));
        ctx.blank_line();
    }
}

fn emit_partial_type(partial: &PartialTypeDeclaration, target: &TargetInterface, ctx: &EmitContext) {
    let accessibility = partial
        .accessibility
        .keyword()
        .map(|keyword| format!("{} ", keyword))
        .unwrap_or_default();

    ctx.add_line(&format!(
        "{}partial {} {}{} : {}{};",
        accessibility,
        partial.kind.keyword(),
        partial.name,
        type_parameter_list(&partial.type_parameters, false),
        target.name,
        type_parameter_list(&target.type_parameters, false)
    ));
}

fn interface_declaration(target: &TargetInterface) -> String {
    let accessibility = target
        .accessibility
        .and_then(Accessibility::keyword)
        .map(|keyword| format!("{} ", keyword))
        .unwrap_or_default();

    format!(
        "{}partial interface {}{}{}",
        accessibility,
        target.name,
        type_parameter_list(&target.type_parameters, true),
        constraint_clauses(&target.type_parameters)
    )
}

fn emit_forwarding_property(forwarding: &ForwardingProperty, ctx: &EmitContext) {
    let accessibility = forwarding
        .accessibility
        .keyword()
        .map(|keyword| format!("{} ", keyword))
        .unwrap_or_default();

    ctx.add_line(&format!(
        "{}{} {} {{ get; }}",
        accessibility, forwarding.type_name, forwarding.name
    ));
}

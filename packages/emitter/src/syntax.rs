//! Small rendering helpers shared by the member emitters

use crate::context::EmitContext;
use autoface_model::{Parameter, TypeParameter};

/// `<T, U>`, or `<in T, out U>` when `with_variance` is set. Empty for no parameters.
pub fn type_parameter_list(parameters: &[TypeParameter], with_variance: bool) -> String {
    if parameters.is_empty() {
        return String::new();
    }
    let rendered: Vec<String> = parameters
        .iter()
        .map(|p| {
            if with_variance {
                format!("{}{}", p.variance.modifier(), p.name)
            } else {
                p.name.clone()
            }
        })
        .collect();
    format!("<{}>", rendered.join(", "))
}

/// ` where T : class, new() where U : struct`
pub fn constraint_clauses(parameters: &[TypeParameter]) -> String {
    parameters
        .iter()
        .filter(|p| !p.constraints.is_empty())
        .map(|p| {
            let constraints: Vec<String> = p.constraints.iter().map(ToString::to_string).collect();
            format!(" where {} : {}", p.name, constraints.join(", "))
        })
        .collect()
}

pub fn parameter_list(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(Parameter::render)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn argument_list(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(Parameter::argument)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn by_ref_prefix(returns_by_ref: bool, returns_by_ref_readonly: bool) -> &'static str {
    if returns_by_ref_readonly {
        "ref readonly "
    } else if returns_by_ref {
        "ref "
    } else {
        ""
    }
}

/// Documentation lines verbatim, each prefixed with `/// `. Whitespace-only
/// lines are dropped.
pub fn emit_docs(docs: Option<&str>, ctx: &EmitContext) {
    let Some(docs) = docs else {
        return;
    };
    for line in docs.lines().filter(|line| !line.trim().is_empty()) {
        ctx.add_line(&format!("/// {}", line));
    }
}

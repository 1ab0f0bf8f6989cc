use crate::context::EmitContext;
use crate::syntax::*;
use autoface_model::{Method, ReturnTypeHandling};

/// Emit one method. With a `receiver` the method forwards to it, otherwise it
/// is declaration only.
pub fn emit_method(method: &Method, receiver: Option<&str>, ctx: &EmitContext) {
    emit_docs(method.docs.as_deref(), ctx);

    let Some(receiver) = receiver else {
        ctx.add_line(&format!("{};", signature(method, false)));
        return;
    };

    let call = format!(
        "{}.{}{}({})",
        receiver,
        method.name,
        type_parameter_list(&method.type_parameters, false),
        argument_list(&method.parameters)
    );

    match method.handling {
        ReturnTypeHandling::Normal => {
            let by_ref = if method.returns_by_ref || method.returns_by_ref_readonly {
                "ref "
            } else {
                ""
            };
            ctx.add_line(&format!("{} => {}{};", signature(method, false), by_ref, call));
        }
        ReturnTypeHandling::Custom => {
            ctx.add_line(&signature(method, false));
            ctx.open_block();
            ctx.add_line(&format!("{};", call));
            ctx.add_line("return default;");
            ctx.close_block();
        }
        ReturnTypeHandling::CustomTask => {
            ctx.add_line(&signature(method, true));
            ctx.open_block();
            ctx.add_line(&format!("await {};", call));
            ctx.add_line("return default;");
            ctx.close_block();
        }
    }
}

fn signature(method: &Method, is_async: bool) -> String {
    format!(
        "{}{}{} {}{}({}){}",
        if is_async { "async " } else { "" },
        by_ref_prefix(method.returns_by_ref, method.returns_by_ref_readonly),
        method.return_type,
        method.name,
        type_parameter_list(&method.type_parameters, false),
        parameter_list(&method.parameters),
        constraint_clauses(&method.type_parameters)
    )
}

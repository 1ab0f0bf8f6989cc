//! # Autoface Emitter
//!
//! Renders a classified [`InterfaceModel`](autoface_model::InterfaceModel) as
//! C# source text: a `partial interface` declaration with one entry per
//! projected member, either declaration only or forwarding to the source type.

mod context;
mod error;
mod generate;
mod interface;
mod method;
mod property;
mod syntax;

pub use context::{EmitContext, EmitOptions};
pub use error::{GenerateError, GenerateResult};
pub use generate::{generate, hint_name, GeneratedSource, Generator};
pub use interface::{emit, emit_member, emit_with};
pub use method::emit_method;
pub use property::{emit_indexer, emit_property};

// Re-export from classifier crate for convenience
pub use autoface_classifier::{
    Classifier, ClassifyError, SynthesisRequest, TargetKind, TargetSpec, TypeCatalog,
    WellKnownAwaitables,
};

#[cfg(test)]
mod tests;

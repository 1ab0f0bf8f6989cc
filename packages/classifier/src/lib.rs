//! # Autoface Classifier
//!
//! Walks the declared members of a resolved type and decides, per member,
//! whether and how it is projected into a synthesized interface.
//!
//! ## Rules
//!
//! - Only public members; only ordinary methods (no accessors, operators,
//!   constructors)
//! - A target predicate selects instance or static members
//! - Obsolete and explicitly excluded members are dropped silently
//! - Duplicates by name + parameter signature keep the first declaration
//! - With a unit type configured, `void` becomes the unit type and `Task` /
//!   `ValueTask` become `Task<Unit>` / `ValueTask<Unit>`
//!
//! ## Example
//!
//! ```rust
//! use autoface_classifier::{Classifier, SynthesisRequest, TargetSpec, TypeCatalog, WellKnownAwaitables};
//! use autoface_model::ResolvedType;
//!
//! let source: ResolvedType = serde_json::from_str(r#"{
//!     "namespace": "Sample",
//!     "name": "Source",
//!     "accessibility": "public",
//!     "members": [
//!         { "member": "method", "name": "Run", "returnType": { "kind": "void" }, "accessibility": "public" }
//!     ]
//! }"#).unwrap();
//!
//! let catalog = TypeCatalog::from_types(vec![source]);
//! let shapes = WellKnownAwaitables::new();
//! let classifier = Classifier::new(&catalog, &shapes);
//!
//! let request = SynthesisRequest::instance("Sample.Source", TargetSpec::new(Some("Sample"), "ISource"));
//! let model = classifier.classify(&request).unwrap();
//! assert_eq!(model.members.len(), 1);
//! ```

pub mod awaitable;
pub mod classifier;
pub mod error;
pub mod host;
pub mod options;

pub use awaitable::{AwaitableFamily, AwaitableIdentity, AwaitableShapes, WellKnownAwaitables};
pub use classifier::{admit, Classifier, Rejection, INSTANCE_PROPERTY};
pub use error::{ClassifyError, ClassifyResult};
pub use host::{Cancellation, NeverCancelled, TypeCatalog, TypeResolver};
pub use options::{
    ForwardingAccess, InterfaceAccess, SynthesisRequest, TargetKind, TargetSpec,
};

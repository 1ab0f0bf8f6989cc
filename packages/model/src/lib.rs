//! Plain data shared by the autoface pipeline: the resolved type snapshot the
//! host hands in, and the classified interface model the emitter reads.

pub mod classified;
pub mod resolved;
pub mod types;

pub use classified::{
    Accessors, ClassifiedMember, ForwardingProperty, Indexer, InterfaceModel, MemberKey, Method,
    PartialTypeDeclaration, Property, ReturnTypeHandling, SetAccessor, SourceBinding,
    TargetInterface,
};
pub use resolved::{
    MethodKind, Parameter, RefKind, ResolvedMember, ResolvedMethod, ResolvedProperty,
    ResolvedType, TypeIdentity,
};
pub use types::{Accessibility, TypeConstraint, TypeKind, TypeParameter, TypeRef, Variance};

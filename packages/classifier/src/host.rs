use autoface_model::{ResolvedType, TypeIdentity};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// Source of resolved type snapshots
pub trait TypeResolver {
    fn resolve(&self, identity: &str) -> Option<&ResolvedType>;
}

/// Cooperative cancellation, polled between members
pub trait Cancellation {
    fn is_cancelled(&self) -> bool;
}

/// Cancellation that never fires
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancelled;

impl Cancellation for NeverCancelled {
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl Cancellation for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// In-memory set of resolved types keyed by identity
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    types: HashMap<TypeIdentity, ResolvedType>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_types(types: impl IntoIterator<Item = ResolvedType>) -> Self {
        let mut catalog = Self::new();
        for ty in types {
            catalog.insert(ty);
        }
        catalog
    }

    /// Insert a type, replacing any earlier snapshot with the same identity
    pub fn insert(&mut self, ty: ResolvedType) -> Option<ResolvedType> {
        self.types.insert(ty.identity(), ty)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.types.contains_key(identity)
    }
}

impl TypeResolver for TypeCatalog {
    fn resolve(&self, identity: &str) -> Option<&ResolvedType> {
        self.types.get(identity)
    }
}

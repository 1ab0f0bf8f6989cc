use autoface_model::TypeRef;
use serde::{Deserialize, Serialize};

/// Family of awaitable types the unit substitution knows how to rebuild
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AwaitableFamily {
    Task,
    ValueTask,
}

/// Identity predicates for the well-known awaitable shapes
pub trait AwaitableShapes {
    /// Family of `ty` if it completes without a payload (`Task`, `ValueTask`)
    fn void_awaitable_family(&self, ty: &TypeRef) -> Option<AwaitableFamily>;

    /// Whether `ty` is an awaitable carrying a result (`Task<T>`, `ValueTask<T>`)
    fn is_awaitable_of_value(&self, ty: &TypeRef) -> bool;

    /// Awaitable of `family` constructed over `argument`
    fn construct(&self, family: AwaitableFamily, argument: TypeRef) -> TypeRef;

    fn is_awaitable_of_void(&self, ty: &TypeRef) -> bool {
        self.void_awaitable_family(ty).is_some()
    }
}

/// Namespace + name of an awaitable type definition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AwaitableIdentity {
    pub namespace: String,
    pub name: String,
}

impl AwaitableIdentity {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    fn matches(&self, ty: &TypeRef, arity: usize) -> bool {
        match ty {
            TypeRef::Named {
                namespace: Some(namespace),
                name,
                type_arguments,
                ..
            } => {
                namespace == &self.namespace && name == &self.name && type_arguments.len() == arity
            }
            _ => false,
        }
    }
}

/// Awaitable identities, resolved once per session and handed to the classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellKnownAwaitables {
    pub task: AwaitableIdentity,
    pub value_task: AwaitableIdentity,
}

impl WellKnownAwaitables {
    pub fn new() -> Self {
        Self {
            task: AwaitableIdentity::new("System.Threading.Tasks", "Task"),
            value_task: AwaitableIdentity::new("System.Threading.Tasks", "ValueTask"),
        }
    }

    fn identity(&self, family: AwaitableFamily) -> &AwaitableIdentity {
        match family {
            AwaitableFamily::Task => &self.task,
            AwaitableFamily::ValueTask => &self.value_task,
        }
    }
}

impl Default for WellKnownAwaitables {
    fn default() -> Self {
        Self::new()
    }
}

impl AwaitableShapes for WellKnownAwaitables {
    fn void_awaitable_family(&self, ty: &TypeRef) -> Option<AwaitableFamily> {
        [AwaitableFamily::Task, AwaitableFamily::ValueTask]
            .into_iter()
            .find(|family| self.identity(*family).matches(ty, 0))
    }

    fn is_awaitable_of_value(&self, ty: &TypeRef) -> bool {
        self.task.matches(ty, 1) || self.value_task.matches(ty, 1)
    }

    fn construct(&self, family: AwaitableFamily, argument: TypeRef) -> TypeRef {
        let identity = self.identity(family);
        TypeRef::generic(Some(&identity.namespace), identity.name.clone(), vec![argument])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasks() -> &'static str {
        "System.Threading.Tasks"
    }

    #[test]
    fn test_void_awaitables() {
        let shapes = WellKnownAwaitables::new();

        let task = TypeRef::named(Some(tasks()), "Task");
        let value_task = TypeRef::named(Some(tasks()), "ValueTask");

        assert_eq!(shapes.void_awaitable_family(&task), Some(AwaitableFamily::Task));
        assert_eq!(
            shapes.void_awaitable_family(&value_task),
            Some(AwaitableFamily::ValueTask)
        );
        assert!(!shapes.is_awaitable_of_value(&task));
    }

    #[test]
    fn test_value_awaitables_are_not_void() {
        let shapes = WellKnownAwaitables::new();
        let task_of_int =
            TypeRef::generic(Some(tasks()), "Task", vec![TypeRef::named(Some("System"), "int")]);

        assert!(!shapes.is_awaitable_of_void(&task_of_int));
        assert!(shapes.is_awaitable_of_value(&task_of_int));
    }

    #[test]
    fn test_lookalikes_in_other_namespaces() {
        let shapes = WellKnownAwaitables::new();
        let fake = TypeRef::named(Some("Sample.Async"), "Task");
        let global = TypeRef::named(None, "Task");

        assert!(!shapes.is_awaitable_of_void(&fake));
        assert!(!shapes.is_awaitable_of_void(&global));
    }

    #[test]
    fn test_nullable_task_is_still_void_awaitable() {
        let shapes = WellKnownAwaitables::new();
        let ty = TypeRef::Named {
            namespace: Some(tasks().to_string()),
            name: "Task".to_string(),
            type_arguments: vec![],
            nullable: true,
        };
        assert!(shapes.is_awaitable_of_void(&ty));
    }

    #[test]
    fn test_construct_over_unit() {
        let shapes = WellKnownAwaitables::new();
        let unit = TypeRef::named(Some("Sample"), "Unit");

        let ty = shapes.construct(AwaitableFamily::ValueTask, unit);
        assert_eq!(ty.to_string(), "ValueTask<Unit>");
        assert_eq!(ty.namespace(), Some("System.Threading.Tasks"));
    }
}

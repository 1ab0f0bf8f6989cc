use crate::resolved::Parameter;
use crate::types::{Accessibility, TypeKind, TypeParameter, TypeRef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How a member's return value is projected into the interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReturnTypeHandling {
    /// Own return type, forwarded as a direct expression
    Normal,
    /// `void` replaced by the unit type; call for effect, then `return default;`
    Custom,
    /// Awaitable of void replaced by awaitable of unit; await, then `return default;`
    CustomTask,
}

/// Identity of a member: name plus parameter-type signature
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberKey {
    pub name: String,
    pub signature: Vec<String>,
}

impl MemberKey {
    pub fn new(name: impl Into<String>, parameters: &[Parameter]) -> Self {
        Self {
            name: name.into(),
            signature: parameters.iter().map(Parameter::signature).collect(),
        }
    }
}

/// Which setter an accessor list carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SetAccessor {
    Set,
    Init,
}

/// Public accessors retained on a property or indexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Accessors {
    pub get: bool,
    pub set: Option<SetAccessor>,
}

impl Accessors {
    pub fn get_only() -> Self {
        Self { get: true, set: None }
    }

    pub fn get_set() -> Self {
        Self {
            get: true,
            set: Some(SetAccessor::Set),
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.get && self.set.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub key: MemberKey,
    pub name: String,
    /// Projected return type, after substitution
    pub return_type: TypeRef,
    pub handling: ReturnTypeHandling,
    pub returns_by_ref: bool,
    pub returns_by_ref_readonly: bool,
    /// Always invariant
    pub type_parameters: Vec<TypeParameter>,
    pub parameters: Vec<Parameter>,
    pub docs: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub key: MemberKey,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    pub handling: ReturnTypeHandling,
    pub accessors: Accessors,
    pub returns_by_ref: bool,
    pub returns_by_ref_readonly: bool,
    pub docs: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indexer {
    pub key: MemberKey,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    pub handling: ReturnTypeHandling,
    pub accessors: Accessors,
    pub parameters: Vec<Parameter>,
    pub returns_by_ref: bool,
    pub returns_by_ref_readonly: bool,
    pub docs: Option<String>,
}

/// A member accepted by the classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "member", rename_all = "camelCase")]
pub enum ClassifiedMember {
    Method(Method),
    Property(Property),
    Indexer(Indexer),
}

impl ClassifiedMember {
    pub fn key(&self) -> &MemberKey {
        match self {
            ClassifiedMember::Method(m) => &m.key,
            ClassifiedMember::Property(p) => &p.key,
            ClassifiedMember::Indexer(i) => &i.key,
        }
    }

    pub fn handling(&self) -> ReturnTypeHandling {
        match self {
            ClassifiedMember::Method(m) => m.handling,
            ClassifiedMember::Property(p) => p.handling,
            ClassifiedMember::Indexer(i) => i.handling,
        }
    }
}

/// The partial interface the output is merged into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetInterface {
    pub name: String,
    pub namespace: Option<String>,
    /// Rendered with variance
    pub type_parameters: Vec<TypeParameter>,
    /// Explicit modifier on the interface declaration, if any
    pub accessibility: Option<Accessibility>,
    pub docs: Option<String>,
}

impl TargetInterface {
    pub fn fully_qualified_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{}.{}", ns, self.name),
            None => self.name.clone(),
        }
    }
}

/// Where forwarding calls are sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceBinding {
    /// Minimally qualified name of the source type
    pub display_name: String,
    /// Expression that receives forwarded calls: `Instance` or the type name
    pub receiver: String,
}

/// Property on the interface that holds the forwarding target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardingProperty {
    pub name: String,
    pub type_name: String,
    pub accessibility: Accessibility,
}

/// `partial class Foo : IFoo;` declaration emitted in extract mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialTypeDeclaration {
    pub accessibility: Accessibility,
    pub kind: TypeKind,
    pub name: String,
    /// Rendered without variance
    pub type_parameters: Vec<TypeParameter>,
}

/// Classified, immutable model of one synthesized interface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceModel {
    pub target: TargetInterface,
    pub source: SourceBinding,
    pub implement: bool,
    pub forwarding: Option<ForwardingProperty>,
    pub partial_type: Option<PartialTypeDeclaration>,
    /// Declaration order of the source type, first occurrence wins
    pub members: Vec<ClassifiedMember>,
    pub namespaces: BTreeSet<String>,
}

impl InterfaceModel {
    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.members.iter().filter_map(|m| match m {
            ClassifiedMember::Method(method) => Some(method),
            _ => None,
        })
    }

    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.members.iter().filter_map(|m| match m {
            ClassifiedMember::Property(property) => Some(property),
            _ => None,
        })
    }

    pub fn indexers(&self) -> impl Iterator<Item = &Indexer> {
        self.members.iter().filter_map(|m| match m {
            ClassifiedMember::Indexer(indexer) => Some(indexer),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolved::RefKind;

    #[test]
    fn test_member_key_distinguishes_overloads() {
        let int = TypeRef::named(Some("System"), "int");
        let a = MemberKey::new("Get", &[Parameter::new("id", int.clone())]);
        let b = MemberKey::new("Get", &[Parameter::new("key", int.clone())]);
        let c = MemberKey::new("Get", &[Parameter::new("id", int).with_ref_kind(RefKind::Out)]);

        // Parameter names are not part of the signature
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_accessors() {
        assert!(!Accessors::get_only().is_empty());
        assert!(Accessors { get: false, set: None }.is_empty());
        assert_eq!(Accessors::get_set().set, Some(SetAccessor::Set));
    }

    #[test]
    fn test_fully_qualified_name() {
        let target = TargetInterface {
            name: "IRepository".to_string(),
            namespace: Some("Sample.Data".to_string()),
            type_parameters: vec![],
            accessibility: None,
            docs: None,
        };
        assert_eq!(target.fully_qualified_name(), "Sample.Data.IRepository");
    }
}

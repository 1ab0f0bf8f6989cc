use autoface_model::{Accessibility, ResolvedMember, TypeIdentity, TypeParameter};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which members of the source type are projected and how calls are forwarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetKind {
    /// Instance members, forwarded through an `Instance` property
    Instance,
    /// Static members, forwarded to the source type itself
    Static,
    /// Instance members of a class or struct, declared on `I<Name>` which the
    /// type is then made to implement
    Extract,
}

impl TargetKind {
    /// Static-vs-instance predicate applied to every candidate member
    pub fn admits(self, member: &ResolvedMember) -> bool {
        match self {
            TargetKind::Static => member.is_static(),
            TargetKind::Instance | TargetKind::Extract => !member.is_static(),
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::Instance => f.write_str("instance"),
            TargetKind::Static => f.write_str("static"),
            TargetKind::Extract => f.write_str("extract"),
        }
    }
}

/// Accessibility of the generated `Instance` property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ForwardingAccess {
    #[default]
    Protected,
    Internal,
}

impl From<ForwardingAccess> for Accessibility {
    fn from(access: ForwardingAccess) -> Self {
        match access {
            ForwardingAccess::Protected => Accessibility::Protected,
            ForwardingAccess::Internal => Accessibility::Internal,
        }
    }
}

/// Accessibility of an extracted interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InterfaceAccess {
    #[default]
    Public,
    Internal,
}

impl From<InterfaceAccess> for Accessibility {
    fn from(access: InterfaceAccess) -> Self {
        match access {
            InterfaceAccess::Public => Accessibility::Public,
            InterfaceAccess::Internal => Accessibility::Internal,
        }
    }
}

/// The user-declared partial interface that receives the generated members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<TypeParameter>,
}

impl TargetSpec {
    pub fn new(namespace: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.map(str::to_string),
            type_parameters: Vec::new(),
        }
    }
}

/// One synthesis request: which type to mirror, into which interface, and how
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisRequest {
    pub source: TypeIdentity,

    /// Required for `instance` and `static`; derived from the source in `extract`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetSpec>,

    pub target_kind: TargetKind,

    /// Emit forwarding bodies instead of bare declarations
    #[serde(default)]
    pub implement: bool,

    /// Type substituted for `void` and awaitable-of-void returns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<TypeIdentity>,

    #[serde(default)]
    pub forwarding_accessibility: ForwardingAccess,

    #[serde(default)]
    pub interface_accessibility: InterfaceAccess,

    /// Fail when no member survives classification
    #[serde(default)]
    pub require_members: bool,
}

impl SynthesisRequest {
    /// Mirror instance members of `source` into `target`
    pub fn instance(source: impl Into<TypeIdentity>, target: TargetSpec) -> Self {
        Self::forwarding(source, target, TargetKind::Instance)
    }

    /// Mirror static members of `source` into `target`
    pub fn static_members(source: impl Into<TypeIdentity>, target: TargetSpec) -> Self {
        Self::forwarding(source, target, TargetKind::Static)
    }

    /// Extract `I<Name>` from a class or struct
    pub fn extract(source: impl Into<TypeIdentity>) -> Self {
        Self {
            source: source.into(),
            target: None,
            target_kind: TargetKind::Extract,
            implement: false,
            unit_type: None,
            forwarding_accessibility: ForwardingAccess::default(),
            interface_accessibility: InterfaceAccess::default(),
            require_members: false,
        }
    }

    fn forwarding(source: impl Into<TypeIdentity>, target: TargetSpec, kind: TargetKind) -> Self {
        Self {
            target: Some(target),
            target_kind: kind,
            ..Self::extract(source)
        }
    }

    pub fn implemented(mut self) -> Self {
        self.implement = true;
        self
    }

    pub fn with_unit_type(mut self, unit_type: impl Into<TypeIdentity>) -> Self {
        self.unit_type = Some(unit_type.into());
        self
    }

    pub fn with_forwarding_access(mut self, access: ForwardingAccess) -> Self {
        self.forwarding_accessibility = access;
        self
    }

    pub fn with_interface_access(mut self, access: InterfaceAccess) -> Self {
        self.interface_accessibility = access;
        self
    }

    pub fn requiring_members(mut self) -> Self {
        self.require_members = true;
        self
    }
}

use crate::types::{Accessibility, TypeKind, TypeParameter, TypeRef};
use serde::{Deserialize, Serialize};

/// Fully qualified metadata name of a type, e.g. `Sample.Repository` or
/// `Sample.Cache`1` for a generic definition
pub type TypeIdentity = String;

/// Snapshot of a type as reported by the host compiler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub name: String,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(default)]
    pub members: Vec<ResolvedMember>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

impl ResolvedType {
    /// Metadata identity used to look this type up
    pub fn identity(&self) -> TypeIdentity {
        let mut identity = match &self.namespace {
            Some(ns) => format!("{}.{}", ns, self.name),
            None => self.name.clone(),
        };
        if !self.type_parameters.is_empty() {
            identity.push_str(&format!("`{}", self.type_parameters.len()));
        }
        identity
    }

    /// Minimally qualified display name, including type parameters
    pub fn display_name(&self) -> String {
        if self.type_parameters.is_empty() {
            return self.name.clone();
        }
        let params: Vec<&str> = self.type_parameters.iter().map(|p| p.name.as_str()).collect();
        format!("{}<{}>", self.name, params.join(", "))
    }

    /// Reference to this type, closed over its own type parameters
    pub fn as_type_ref(&self) -> TypeRef {
        TypeRef::Named {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            type_arguments: self
                .type_parameters
                .iter()
                .map(|p| TypeRef::parameter(p.name.clone()))
                .collect(),
            nullable: false,
        }
    }
}

/// A declared member of a resolved type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "member", rename_all = "camelCase")]
pub enum ResolvedMember {
    Method(ResolvedMethod),
    Property(ResolvedProperty),
}

impl ResolvedMember {
    pub fn name(&self) -> &str {
        match self {
            ResolvedMember::Method(m) => &m.name,
            ResolvedMember::Property(p) => &p.name,
        }
    }

    pub fn accessibility(&self) -> Accessibility {
        match self {
            ResolvedMember::Method(m) => m.accessibility,
            ResolvedMember::Property(p) => p.accessibility,
        }
    }

    pub fn is_static(&self) -> bool {
        match self {
            ResolvedMember::Method(m) => m.is_static,
            ResolvedMember::Property(p) => p.is_static,
        }
    }

    /// Whether the member carries an obsolete or explicit exclude marker
    pub fn is_excluded(&self) -> bool {
        match self {
            ResolvedMember::Method(m) => m.obsolete || m.excluded,
            ResolvedMember::Property(p) => p.obsolete || p.excluded,
        }
    }
}

/// Kind of a method symbol; only `Ordinary` methods are projected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MethodKind {
    #[default]
    Ordinary,
    Constructor,
    StaticConstructor,
    Destructor,
    PropertyGet,
    PropertySet,
    EventAdd,
    EventRemove,
    Operator,
    Conversion,
    ExplicitInterfaceImplementation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMethod {
    pub name: String,
    pub return_type: TypeRef,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default)]
    pub kind: MethodKind,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub returns_by_ref: bool,
    #[serde(default)]
    pub returns_by_ref_readonly: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    #[serde(default)]
    pub obsolete: bool,
    #[serde(default)]
    pub excluded: bool,
}

impl ResolvedMethod {
    /// A public, ordinary, non-static method with no parameters
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            return_type,
            parameters: Vec::new(),
            type_parameters: Vec::new(),
            accessibility: Accessibility::Public,
            kind: MethodKind::Ordinary,
            is_static: false,
            returns_by_ref: false,
            returns_by_ref_readonly: false,
            docs: None,
            obsolete: false,
            excluded: false,
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_type_parameter(mut self, parameter: TypeParameter) -> Self {
        self.type_parameters.push(parameter);
        self
    }

    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = Some(docs.into());
        self
    }
}

/// Property or indexer. Indexers carry a non-empty parameter list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Accessibility of the getter, `None` when there is no getter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub getter: Option<Accessibility>,
    /// Accessibility of the setter, `None` when there is no setter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setter: Option<Accessibility>,
    #[serde(default)]
    pub init_only: bool,
    #[serde(default)]
    pub is_indexer: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub returns_by_ref: bool,
    #[serde(default)]
    pub returns_by_ref_readonly: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    #[serde(default)]
    pub obsolete: bool,
    #[serde(default)]
    pub excluded: bool,
}

impl ResolvedProperty {
    /// A public, non-static property with a public getter
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            getter: Some(Accessibility::Public),
            setter: None,
            init_only: false,
            is_indexer: false,
            parameters: Vec::new(),
            accessibility: Accessibility::Public,
            is_static: false,
            returns_by_ref: false,
            returns_by_ref_readonly: false,
            docs: None,
            obsolete: false,
            excluded: false,
        }
    }

    /// A public indexer `this[...]` with a public getter
    pub fn indexer(ty: TypeRef, parameters: Vec<Parameter>) -> Self {
        Self {
            is_indexer: true,
            parameters,
            ..Self::new("this[]", ty)
        }
    }

    pub fn with_getter(mut self, accessibility: Option<Accessibility>) -> Self {
        self.getter = accessibility;
        self
    }

    pub fn with_setter(mut self, accessibility: Option<Accessibility>) -> Self {
        self.setter = accessibility;
        self
    }

    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// How an argument is passed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RefKind {
    #[default]
    None,
    Ref,
    Out,
    In,
    Params,
}

impl RefKind {
    fn declaration_prefix(self) -> &'static str {
        match self {
            RefKind::None => "",
            RefKind::Ref => "ref ",
            RefKind::Out => "out ",
            RefKind::In => "in ",
            RefKind::Params => "params ",
        }
    }

    fn argument_prefix(self) -> &'static str {
        match self {
            RefKind::None | RefKind::Params => "",
            RefKind::Ref => "ref ",
            RefKind::Out => "out ",
            RefKind::In => "in ",
        }
    }
}

/// Method or indexer parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub ref_kind: RefKind,
    /// Default value expression as written in source, without the `=`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            ref_kind: RefKind::None,
            default_value: None,
        }
    }

    pub fn with_ref_kind(mut self, ref_kind: RefKind) -> Self {
        self.ref_kind = ref_kind;
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn has_default_value(&self) -> bool {
        self.default_value.is_some()
    }

    /// Textual declaration without the default value, e.g. `ref int count`
    pub fn declaration(&self) -> String {
        format!("{}{} {}", self.ref_kind.declaration_prefix(), self.ty, self.name)
    }

    /// Declaration including the default value where present
    pub fn render(&self) -> String {
        match &self.default_value {
            Some(value) => format!("{} = {}", self.declaration(), value),
            None => self.declaration(),
        }
    }

    /// Forwarded argument, e.g. `out result`
    pub fn argument(&self) -> String {
        format!("{}{}", self.ref_kind.argument_prefix(), self.name)
    }

    /// Type part of the member signature used for deduplication
    pub fn signature(&self) -> String {
        format!("{}{}", self.ref_kind.argument_prefix(), self.ty)
    }
}

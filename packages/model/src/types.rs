use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Declared accessibility of a type or member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Accessibility {
    #[default]
    NotApplicable,
    Private,
    PrivateProtected,
    Protected,
    Internal,
    ProtectedInternal,
    Public,
}

impl Accessibility {
    /// C# modifier for this accessibility, if it has one
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Accessibility::Private => Some("private"),
            Accessibility::PrivateProtected => Some("private protected"),
            Accessibility::Protected => Some("protected"),
            Accessibility::Internal => Some("internal"),
            Accessibility::ProtectedInternal => Some("protected internal"),
            Accessibility::Public => Some("public"),
            Accessibility::NotApplicable => None,
        }
    }

    pub fn is_public(self) -> bool {
        self == Accessibility::Public
    }
}

/// Kind of a named type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeKind {
    #[default]
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
}

impl TypeKind {
    pub fn keyword(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
            TypeKind::Delegate => "delegate",
        }
    }
}

/// Variance annotation of a generic parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Variance {
    #[default]
    None,
    Covariant,
    Contravariant,
}

impl Variance {
    /// Prefix rendered in front of a variant type parameter
    pub fn modifier(self) -> &'static str {
        match self {
            Variance::None => "",
            Variance::Covariant => "out ",
            Variance::Contravariant => "in ",
        }
    }
}

/// Generic type parameter of a type or method
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeParameter {
    pub name: String,
    #[serde(default)]
    pub variance: Variance,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<TypeConstraint>,
}

/// One entry of a `where T : ...` clause
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeConstraint {
    /// `class`, `struct`, `notnull`, `unmanaged`, `new()` and friends
    Keyword(String),
    /// Base type or interface, e.g. `IComparable<T>`
    Type(TypeRef),
}

impl TypeConstraint {
    pub fn collect_namespaces(&self, out: &mut BTreeSet<String>) {
        if let TypeConstraint::Type(ty) = self {
            ty.collect_namespaces(out);
        }
    }
}

impl From<&str> for TypeConstraint {
    fn from(keyword: &str) -> Self {
        TypeConstraint::Keyword(keyword.to_string())
    }
}

impl From<String> for TypeConstraint {
    fn from(keyword: String) -> Self {
        TypeConstraint::Keyword(keyword)
    }
}

impl From<TypeRef> for TypeConstraint {
    fn from(ty: TypeRef) -> Self {
        TypeConstraint::Type(ty)
    }
}

impl fmt::Display for TypeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeConstraint::Keyword(keyword) => f.write_str(keyword),
            TypeConstraint::Type(ty) => write!(f, "{}", ty),
        }
    }
}

impl TypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variance: Variance::None,
            constraints: Vec::new(),
        }
    }

    pub fn with_variance(mut self, variance: Variance) -> Self {
        self.variance = variance;
        self
    }

    pub fn with_constraint(mut self, constraint: impl Into<TypeConstraint>) -> Self {
        self.constraints.push(constraint.into());
        self
    }

    /// Namespaces referenced by the constraint types
    pub fn collect_namespaces(&self, out: &mut BTreeSet<String>) {
        for constraint in &self.constraints {
            constraint.collect_namespaces(out);
        }
    }

    /// Copy of this parameter with variance stripped
    pub fn invariant(&self) -> Self {
        Self {
            variance: Variance::None,
            ..self.clone()
        }
    }
}

/// Fully resolved reference to a type, as the host reports it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeRef {
    Void,

    /// Named type, possibly generic. `name` is the display name (`int`, `Task`).
    Named {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        namespace: Option<String>,
        name: String,
        #[serde(rename = "typeArguments", default, skip_serializing_if = "Vec::is_empty")]
        type_arguments: Vec<TypeRef>,
        #[serde(default)]
        nullable: bool,
    },

    Array {
        element: Box<TypeRef>,
        #[serde(default = "default_rank")]
        rank: u32,
        #[serde(default)]
        nullable: bool,
    },

    /// Reference to a generic type parameter in scope
    Parameter {
        name: String,
        #[serde(default)]
        nullable: bool,
    },
}

fn default_rank() -> u32 {
    1
}

impl TypeRef {
    pub fn named(namespace: Option<&str>, name: impl Into<String>) -> Self {
        TypeRef::Named {
            namespace: namespace.map(str::to_string),
            name: name.into(),
            type_arguments: Vec::new(),
            nullable: false,
        }
    }

    pub fn generic(namespace: Option<&str>, name: impl Into<String>, type_arguments: Vec<TypeRef>) -> Self {
        TypeRef::Named {
            namespace: namespace.map(str::to_string),
            name: name.into(),
            type_arguments,
            nullable: false,
        }
    }

    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array {
            element: Box::new(element),
            rank: 1,
            nullable: false,
        }
    }

    pub fn parameter(name: impl Into<String>) -> Self {
        TypeRef::Parameter {
            name: name.into(),
            nullable: false,
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Void)
    }

    /// Namespace of the outermost type, `None` for the global namespace
    pub fn namespace(&self) -> Option<&str> {
        match self {
            TypeRef::Named { namespace, .. } => namespace.as_deref(),
            _ => None,
        }
    }

    /// Collect every namespace this type touches, including type arguments
    /// and array element types
    pub fn collect_namespaces(&self, out: &mut BTreeSet<String>) {
        match self {
            TypeRef::Void | TypeRef::Parameter { .. } => {}
            TypeRef::Named {
                namespace,
                type_arguments,
                ..
            } => {
                if let Some(ns) = namespace {
                    out.insert(ns.clone());
                }
                for arg in type_arguments {
                    arg.collect_namespaces(out);
                }
            }
            TypeRef::Array { element, .. } => element.collect_namespaces(out),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Void => f.write_str("void"),
            TypeRef::Named {
                name,
                type_arguments,
                nullable,
                ..
            } => {
                f.write_str(name)?;
                if !type_arguments.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in type_arguments.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    f.write_str(">")?;
                }
                if *nullable {
                    f.write_str("?")?;
                }
                Ok(())
            }
            TypeRef::Array {
                element,
                rank,
                nullable,
            } => {
                let commas = ",".repeat(rank.saturating_sub(1) as usize);
                write!(f, "{}[{}]", element, commas)?;
                if *nullable {
                    f.write_str("?")?;
                }
                Ok(())
            }
            TypeRef::Parameter { name, nullable } => {
                f.write_str(name)?;
                if *nullable {
                    f.write_str("?")?;
                }
                Ok(())
            }
        }
    }
}

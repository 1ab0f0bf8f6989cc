use crate::awaitable::AwaitableShapes;
use crate::error::{ClassifyError, ClassifyResult};
use crate::host::{Cancellation, NeverCancelled, TypeResolver};
use crate::options::{SynthesisRequest, TargetKind};
use autoface_model::*;
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, info, instrument};

/// Name of the property that holds the forwarding target in instance mode
pub const INSTANCE_PROPERTY: &str = "Instance";

/// Why a member was left out of the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotPublic,
    NotOrdinary,
    TargetMismatch,
    Excluded,
    Duplicate,
    NoPublicAccessors,
    IndexerWithoutParameters,
    ClashesWithForwardingProperty,
}

/// Classifies the public surface of a type into an [`InterfaceModel`]
pub struct Classifier<'a> {
    resolver: &'a dyn TypeResolver,
    shapes: &'a dyn AwaitableShapes,
    cancellation: &'a dyn Cancellation,
}

impl<'a> Classifier<'a> {
    pub fn new(resolver: &'a dyn TypeResolver, shapes: &'a dyn AwaitableShapes) -> Self {
        Self {
            resolver,
            shapes,
            cancellation: &NeverCancelled,
        }
    }

    pub fn with_cancellation(mut self, cancellation: &'a dyn Cancellation) -> Self {
        self.cancellation = cancellation;
        self
    }

    /// Resolve the request's source and unit types, then classify
    #[instrument(skip(self, request), fields(source = %request.source, mode = %request.target_kind))]
    pub fn classify(&self, request: &SynthesisRequest) -> ClassifyResult<InterfaceModel> {
        let source = self
            .resolver
            .resolve(&request.source)
            .ok_or_else(|| ClassifyError::UnresolvedType(request.source.clone()))?;

        let unit = match &request.unit_type {
            Some(identity) => Some(
                self.resolver
                    .resolve(identity)
                    .map(ResolvedType::as_type_ref)
                    .ok_or_else(|| ClassifyError::UnresolvedUnitType(identity.clone()))?,
            ),
            None => None,
        };

        self.classify_type(source, request, unit.as_ref())
    }

    /// Classify an already resolved type
    pub fn classify_type(
        &self,
        source: &ResolvedType,
        request: &SynthesisRequest,
        unit: Option<&TypeRef>,
    ) -> ClassifyResult<InterfaceModel> {
        let mode = request.target_kind;
        validate_request(request, unit)?;

        let (target, partial_type) = match mode {
            TargetKind::Extract => {
                let partial = partial_type_for(source)?;
                (extracted_target(source, request), Some(partial))
            }
            TargetKind::Instance | TargetKind::Static => {
                let spec = request
                    .target
                    .as_ref()
                    .ok_or(ClassifyError::MissingTarget(mode))?;
                let target = TargetInterface {
                    name: spec.name.clone(),
                    namespace: spec.namespace.clone(),
                    type_parameters: spec.type_parameters.clone(),
                    accessibility: None,
                    docs: None,
                };
                (target, None)
            }
        };

        let display_name = source.display_name();
        let receiver = match mode {
            TargetKind::Instance => INSTANCE_PROPERTY.to_string(),
            TargetKind::Static | TargetKind::Extract => display_name.clone(),
        };

        let forwarding = (mode == TargetKind::Instance && request.implement).then(|| {
            ForwardingProperty {
                name: INSTANCE_PROPERTY.to_string(),
                type_name: display_name.clone(),
                accessibility: request.forwarding_accessibility.into(),
            }
        });

        let mut members = Vec::new();
        let mut seen = HashSet::new();
        let mut namespaces = BTreeSet::new();

        for member in &source.members {
            if self.cancellation.is_cancelled() {
                return Err(ClassifyError::Cancelled(source.identity()));
            }

            let classified = admit(member, mode)
                .and_then(|()| self.classify_member(member, unit))
                .and_then(|classified| {
                    if forwarding.is_some() && classified.key().name == INSTANCE_PROPERTY {
                        return Err(Rejection::ClashesWithForwardingProperty);
                    }
                    if !seen.insert(classified.key().clone()) {
                        return Err(Rejection::Duplicate);
                    }
                    Ok(classified)
                });

            match classified {
                Ok(classified) => {
                    debug!(member = member.name(), handling = ?classified.handling(), "Projecting member");
                    collect_member_namespaces(&classified, &mut namespaces);
                    members.push(classified);
                }
                Err(reason) => {
                    debug!(member = member.name(), ?reason, "Skipping member");
                }
            }
        }

        if request.require_members && members.is_empty() {
            return Err(ClassifyError::NoMatchingMembers {
                type_name: source.identity(),
                mode,
            });
        }

        if let Some(ns) = &source.namespace {
            namespaces.insert(ns.clone());
        }
        if let Some(unit) = unit {
            unit.collect_namespaces(&mut namespaces);
        }
        for tp in &target.type_parameters {
            tp.collect_namespaces(&mut namespaces);
        }

        info!(
            members = members.len(),
            namespaces = namespaces.len(),
            target = %target.fully_qualified_name(),
            "Classification complete"
        );

        Ok(InterfaceModel {
            target,
            source: SourceBinding {
                display_name,
                receiver,
            },
            implement: request.implement,
            forwarding,
            partial_type,
            members,
            namespaces,
        })
    }

    fn classify_member(
        &self,
        member: &ResolvedMember,
        unit: Option<&TypeRef>,
    ) -> Result<ClassifiedMember, Rejection> {
        match member {
            ResolvedMember::Method(method) => Ok(ClassifiedMember::Method(self.classify_method(method, unit))),
            ResolvedMember::Property(property) => self.classify_property(property, unit),
        }
    }

    fn classify_method(&self, method: &ResolvedMethod, unit: Option<&TypeRef>) -> Method {
        let by_ref_return = method.returns_by_ref || method.returns_by_ref_readonly;
        // An async forwarding body cannot take ref, out or in parameters
        let blocks_async = method
            .parameters
            .iter()
            .any(|p| matches!(p.ref_kind, RefKind::Ref | RefKind::Out | RefKind::In))
            && self.is_void_awaitable(&method.return_type);

        let (return_type, handling) = if by_ref_return || blocks_async {
            (method.return_type.clone(), ReturnTypeHandling::Normal)
        } else {
            self.project_method_return(unit, &method.return_type)
        };

        Method {
            key: MemberKey::new(method.name.clone(), &method.parameters),
            name: method.name.clone(),
            return_type,
            handling,
            returns_by_ref: method.returns_by_ref,
            returns_by_ref_readonly: method.returns_by_ref_readonly,
            type_parameters: method
                .type_parameters
                .iter()
                .map(TypeParameter::invariant)
                .collect(),
            parameters: method.parameters.clone(),
            docs: method.docs.clone(),
        }
    }

    /// Total over (unit configured, returns void, return type)
    pub fn project_method_return(
        &self,
        unit: Option<&TypeRef>,
        return_type: &TypeRef,
    ) -> (TypeRef, ReturnTypeHandling) {
        match unit {
            Some(unit) if return_type.is_void() => (unit.clone(), ReturnTypeHandling::Custom),
            Some(unit) => match self.shapes.void_awaitable_family(return_type) {
                Some(family) => (
                    self.shapes.construct(family, unit.clone()),
                    ReturnTypeHandling::CustomTask,
                ),
                None => (return_type.clone(), ReturnTypeHandling::Normal),
            },
            None => (return_type.clone(), ReturnTypeHandling::Normal),
        }
    }

    fn is_void_awaitable(&self, ty: &TypeRef) -> bool {
        self.shapes.void_awaitable_family(ty).is_some()
    }

    fn classify_property(
        &self,
        property: &ResolvedProperty,
        unit: Option<&TypeRef>,
    ) -> Result<ClassifiedMember, Rejection> {
        let accessors = public_accessors(property);
        if accessors.is_empty() {
            return Err(Rejection::NoPublicAccessors);
        }

        let by_ref = property.returns_by_ref || property.returns_by_ref_readonly;
        // A substituted setter could not accept the original awaitable
        let substitutable = !by_ref && accessors.get && accessors.set.is_none();
        let (ty, handling) = match (unit, substitutable) {
            (Some(unit), true) => match self.shapes.void_awaitable_family(&property.ty) {
                Some(family) => (
                    self.shapes.construct(family, unit.clone()),
                    ReturnTypeHandling::CustomTask,
                ),
                None => (property.ty.clone(), ReturnTypeHandling::Normal),
            },
            _ => (property.ty.clone(), ReturnTypeHandling::Normal),
        };

        if property.is_indexer {
            if property.parameters.is_empty() {
                return Err(Rejection::IndexerWithoutParameters);
            }
            return Ok(ClassifiedMember::Indexer(Indexer {
                key: MemberKey::new("this[]", &property.parameters),
                ty,
                handling,
                accessors,
                parameters: property.parameters.clone(),
                returns_by_ref: property.returns_by_ref,
                returns_by_ref_readonly: property.returns_by_ref_readonly,
                docs: property.docs.clone(),
            }));
        }

        Ok(ClassifiedMember::Property(Property {
            key: MemberKey::new(property.name.clone(), &[]),
            name: property.name.clone(),
            ty,
            handling,
            accessors,
            returns_by_ref: property.returns_by_ref,
            returns_by_ref_readonly: property.returns_by_ref_readonly,
            docs: property.docs.clone(),
        }))
    }
}

/// Filtering rules 1-4: public, ordinary, target predicate, exclusion markers.
/// Deduplication happens after classification.
pub fn admit(member: &ResolvedMember, mode: TargetKind) -> Result<(), Rejection> {
    if !member.accessibility().is_public() {
        return Err(Rejection::NotPublic);
    }
    if let ResolvedMember::Method(method) = member {
        if method.kind != MethodKind::Ordinary {
            return Err(Rejection::NotOrdinary);
        }
    }
    if !mode.admits(member) {
        return Err(Rejection::TargetMismatch);
    }
    if member.is_excluded() {
        return Err(Rejection::Excluded);
    }
    Ok(())
}

fn public_accessors(property: &ResolvedProperty) -> Accessors {
    let set = match property.setter {
        Some(Accessibility::Public) if property.init_only => Some(SetAccessor::Init),
        Some(Accessibility::Public) => Some(SetAccessor::Set),
        _ => None,
    };
    Accessors {
        get: property.getter == Some(Accessibility::Public),
        set,
    }
}

fn validate_request(request: &SynthesisRequest, unit: Option<&TypeRef>) -> ClassifyResult<()> {
    if request.target_kind != TargetKind::Extract {
        return Ok(());
    }
    let unsupported = |option: &str| ClassifyError::UnsupportedOption {
        mode: TargetKind::Extract,
        option: option.to_string(),
    };
    if request.implement {
        return Err(unsupported("forwarding implementations"));
    }
    if unit.is_some() || request.unit_type.is_some() {
        return Err(unsupported("unit type substitution"));
    }
    Ok(())
}

fn extracted_target(source: &ResolvedType, request: &SynthesisRequest) -> TargetInterface {
    TargetInterface {
        name: format!("I{}", source.name),
        namespace: source.namespace.clone(),
        type_parameters: source.type_parameters.clone(),
        accessibility: Some(request.interface_accessibility.into()),
        docs: source.docs.clone(),
    }
}

fn partial_type_for(source: &ResolvedType) -> ClassifyResult<PartialTypeDeclaration> {
    if !matches!(source.kind, TypeKind::Class | TypeKind::Struct) {
        return Err(ClassifyError::UnsupportedTypeKind {
            type_name: source.identity(),
            kind: source.kind.keyword().to_string(),
        });
    }
    if source.accessibility.keyword().is_none() {
        return Err(ClassifyError::UnsupportedAccessibility(source.identity()));
    }

    Ok(PartialTypeDeclaration {
        accessibility: source.accessibility,
        kind: source.kind,
        name: source.name.clone(),
        type_parameters: source
            .type_parameters
            .iter()
            .map(TypeParameter::invariant)
            .collect(),
    })
}

fn collect_member_namespaces(member: &ClassifiedMember, out: &mut BTreeSet<String>) {
    let (ty, parameters) = match member {
        ClassifiedMember::Method(m) => {
            for tp in &m.type_parameters {
                tp.collect_namespaces(out);
            }
            (&m.return_type, m.parameters.as_slice())
        }
        ClassifiedMember::Property(p) => (&p.ty, &[][..]),
        ClassifiedMember::Indexer(i) => (&i.ty, i.parameters.as_slice()),
    };
    ty.collect_namespaces(out);
    for parameter in parameters {
        parameter.ty.collect_namespaces(out);
    }
}

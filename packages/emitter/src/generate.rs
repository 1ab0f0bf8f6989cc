use crate::context::EmitOptions;
use crate::error::GenerateResult;
use crate::interface::emit_with;
use autoface_classifier::{AwaitableShapes, Cancellation, Classifier, SynthesisRequest, TypeResolver};
use autoface_model::{InterfaceModel, TargetInterface};
use serde::Serialize;
use tracing::{info, instrument};

/// One generated file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSource {
    /// Stable per target interface, so a host can replace earlier output
    pub hint_name: String,
    pub text: String,
}

/// `Sample.IRepository.AutoInterface.g.cs`, or `Sample.ICache_2.AutoInterface.g.cs`
/// for a generic target
pub fn hint_name(target: &TargetInterface) -> String {
    let mut name = target.fully_qualified_name();
    if !target.type_parameters.is_empty() {
        name.push_str(&format!("_{}", target.type_parameters.len()));
    }
    format!("{}.AutoInterface.g.cs", name)
}

/// Classify and emit in one step
pub struct Generator<'a> {
    classifier: Classifier<'a>,
    options: EmitOptions,
}

impl<'a> Generator<'a> {
    pub fn new(resolver: &'a dyn TypeResolver, shapes: &'a dyn AwaitableShapes) -> Self {
        Self {
            classifier: Classifier::new(resolver, shapes),
            options: EmitOptions::default(),
        }
    }

    pub fn with_cancellation(mut self, cancellation: &'a dyn Cancellation) -> Self {
        self.classifier = self.classifier.with_cancellation(cancellation);
        self
    }

    pub fn with_options(mut self, options: EmitOptions) -> Self {
        self.options = options;
        self
    }

    pub fn model(&self, request: &SynthesisRequest) -> GenerateResult<InterfaceModel> {
        Ok(self.classifier.classify(request)?)
    }

    #[instrument(skip(self, request), fields(source = %request.source))]
    pub fn generate(&self, request: &SynthesisRequest) -> GenerateResult<GeneratedSource> {
        let model = self.model(request)?;
        let text = emit_with(&model, self.options.clone());
        let hint_name = hint_name(&model.target);

        info!(hint_name = %hint_name, bytes = text.len(), "Generated interface");

        Ok(GeneratedSource { hint_name, text })
    }

    /// Classified model as pretty JSON
    pub fn inspect(&self, request: &SynthesisRequest) -> GenerateResult<String> {
        let model = self.model(request)?;
        Ok(serde_json::to_string_pretty(&model)?)
    }
}

pub fn generate(
    resolver: &dyn TypeResolver,
    shapes: &dyn AwaitableShapes,
    request: &SynthesisRequest,
) -> GenerateResult<GeneratedSource> {
    Generator::new(resolver, shapes).generate(request)
}

use autoface_emitter::{generate, SynthesisRequest, TypeCatalog, WellKnownAwaitables};
use autoface_model::{
    Accessibility, Parameter, ResolvedMember, ResolvedMethod, ResolvedProperty, ResolvedType,
    TypeKind, TypeParameter, TypeRef, Variance,
};

fn main() {
    let value = TypeRef::parameter("TValue");
    let key = TypeRef::parameter("TKey");

    let cache = ResolvedType {
        namespace: Some("Sample.Caching".to_string()),
        name: "MemoryCache".to_string(),
        kind: TypeKind::Class,
        accessibility: Accessibility::Public,
        type_parameters: vec![
            TypeParameter::new("TKey").with_variance(Variance::Contravariant),
            TypeParameter::new("TValue").with_variance(Variance::Covariant),
        ],
        members: vec![
            ResolvedMember::Property(ResolvedProperty::new(
                "Count",
                TypeRef::named(Some("System"), "int"),
            )),
            ResolvedMember::Method(
                ResolvedMethod::new("Get", value)
                    .with_parameter(Parameter::new("key", key))
                    .with_docs("<summary>\nLooks up a cached value.\n</summary>"),
            ),
        ],
        docs: Some("<summary>\nIn-memory cache.\n</summary>".to_string()),
    };

    let catalog = TypeCatalog::from_types(vec![cache]);
    let shapes = WellKnownAwaitables::new();
    let request = SynthesisRequest::extract("Sample.Caching.MemoryCache`2");

    match generate(&catalog, &shapes, &request) {
        Ok(source) => {
            println!("// {}", source.hint_name);
            println!("{}", source.text);
        }
        Err(e) => {
            eprintln!("Generation error: {}", e);
        }
    }
}

use autoface_emitter::{generate, SynthesisRequest, TargetSpec, TypeCatalog, WellKnownAwaitables};
use autoface_model::ResolvedType;

fn main() {
    let types = r#"[
        {
            "namespace": "Sample",
            "name": "Clock",
            "accessibility": "public",
            "members": [
                {
                    "member": "property",
                    "name": "Now",
                    "type": { "kind": "named", "namespace": "System", "name": "DateTime" },
                    "getter": "public",
                    "accessibility": "public"
                },
                {
                    "member": "method",
                    "name": "Delay",
                    "returnType": { "kind": "named", "namespace": "System.Threading.Tasks", "name": "Task" },
                    "parameters": [{ "name": "milliseconds", "type": { "kind": "named", "namespace": "System", "name": "int" } }],
                    "accessibility": "public"
                },
                {
                    "member": "method",
                    "name": "Reset",
                    "returnType": { "kind": "void" },
                    "accessibility": "public"
                }
            ]
        },
        { "namespace": "Sample", "name": "Unit", "kind": "struct", "accessibility": "public" }
    ]"#;

    let types: Vec<ResolvedType> = serde_json::from_str(types).expect("Failed to parse types");
    let catalog = TypeCatalog::from_types(types);
    let shapes = WellKnownAwaitables::new();

    let request = SynthesisRequest::instance("Sample.Clock", TargetSpec::new(Some("Sample"), "IClock"))
        .implemented()
        .with_unit_type("Sample.Unit");

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

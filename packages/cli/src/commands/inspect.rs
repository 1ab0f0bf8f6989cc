use crate::manifest::Manifest;
use anyhow::{anyhow, Result};
use autoface_classifier::{TypeCatalog, WellKnownAwaitables};
use autoface_emitter::Generator;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Manifest containing the type and its request
    pub manifest: String,

    /// Source type identity, e.g. Sample.Clock
    #[arg(value_name = "TYPE")]
    pub type_name: String,
}

pub fn inspect(args: InspectArgs, cwd: &Path) -> Result<()> {
    println!("{}", inspect_to_string(&args, cwd)?);
    Ok(())
}

/// Classified models of every request for `type_name`, as one JSON array
pub fn inspect_to_string(args: &InspectArgs, cwd: &Path) -> Result<String> {
    let manifest = Manifest::load(&cwd.join(&args.manifest))?;
    let requests: Vec<_> = manifest
        .requests
        .iter()
        .filter(|r| r.source == args.type_name)
        .cloned()
        .collect();

    if requests.is_empty() {
        return Err(anyhow!(
            "No request for '{}' in {}",
            args.type_name,
            args.manifest
        ));
    }

    let catalog = TypeCatalog::from_types(manifest.types);
    let shapes = WellKnownAwaitables::new();
    let generator = Generator::new(&catalog, &shapes);

    let models = requests
        .iter()
        .map(|request| generator.model(request))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(serde_json::to_string_pretty(&models)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "types": [
            {
                "namespace": "Sample",
                "name": "Clock",
                "accessibility": "public",
                "members": [
                    { "member": "method", "name": "Reset", "returnType": { "kind": "void" }, "accessibility": "public" }
                ]
            }
        ],
        "requests": [
            { "source": "Sample.Clock", "target": { "name": "ITimeSource" }, "targetKind": "instance" },
            { "source": "Sample.Clock", "targetKind": "extract" }
        ]
    }"#;

    #[test]
    fn test_inspect_prints_models_as_array() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("clock.types.json"), MANIFEST).unwrap();

        let args = InspectArgs {
            manifest: "clock.types.json".to_string(),
            type_name: "Sample.Clock".to_string(),
        };
        let json = inspect_to_string(&args, dir.path()).unwrap();
        let models: serde_json::Value = serde_json::from_str(&json).unwrap();

        let models = models.as_array().expect("array of models");
        assert_eq!(models.len(), 2);
        assert_eq!(models[0]["target"]["name"], "ITimeSource");
        assert_eq!(models[0]["source"]["receiver"], "Instance");
        assert_eq!(models[0]["members"][0]["name"], "Reset");
        assert_eq!(models[0]["members"][0]["handling"], "normal");
        assert_eq!(models[1]["target"]["name"], "IClock");
    }

    #[test]
    fn test_inspect_unknown_type() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("clock.types.json"), MANIFEST).unwrap();

        let args = InspectArgs {
            manifest: "clock.types.json".to_string(),
            type_name: "Sample.Other".to_string(),
        };
        let err = inspect_to_string(&args, dir.path()).unwrap_err();
        assert!(err.to_string().contains("No request for 'Sample.Other'"));
    }
}

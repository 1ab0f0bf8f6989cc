use autoface_classifier::{SynthesisRequest, TypeCatalog};
use autoface_model::ResolvedType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Type snapshots plus the interfaces to synthesize from them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub types: Vec<ResolvedType>,
    #[serde(default)]
    pub requests: Vec<SynthesisRequest>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// All manifests found under one directory, merged
#[derive(Debug, Default)]
pub struct Project {
    pub catalog: TypeCatalog,
    pub requests: Vec<SynthesisRequest>,
    pub manifests: Vec<PathBuf>,
}

impl Project {
    pub fn load(dir: &Path, suffix: &str) -> Result<Self, ManifestError> {
        let mut project = Project::default();
        for path in find_manifests(dir, suffix) {
            let manifest = Manifest::load(&path)?;
            debug!(path = %path.display(), types = manifest.types.len(), "Loaded manifest");
            project.add(manifest);
            project.manifests.push(path);
        }
        Ok(project)
    }

    pub fn add(&mut self, manifest: Manifest) {
        for ty in manifest.types {
            if let Some(previous) = self.catalog.insert(ty) {
                warn!(identity = %previous.identity(), "Type declared in more than one manifest, keeping the last");
            }
        }
        self.requests.extend(manifest.requests);
    }
}

/// Manifest files under `dir`, sorted so runs are reproducible
pub fn find_manifests(dir: &Path, suffix: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name().to_string_lossy().ends_with(suffix))
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}

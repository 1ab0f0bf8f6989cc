use autoface_emitter::EmitOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "autoface.config.json";

/// Autoface configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory searched for type manifests
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Directory generated sources are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// File name suffix identifying a type manifest
    #[serde(default = "default_manifest_suffix")]
    pub manifest_suffix: String,

    #[serde(default)]
    pub emit: EmitConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmitConfig {
    /// Spaces per indentation level
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Open each file with `#nullable enable`
    #[serde(default = "default_true")]
    pub nullable: bool,
}

fn default_src_dir() -> String {
    "src".to_string()
}

fn default_out_dir() -> String {
    "generated".to_string()
}

fn default_manifest_suffix() -> String {
    ".types.json".to_string()
}

fn default_indent_size() -> usize {
    4
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn get_src_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.src_dir)
    }

    pub fn get_out_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }

    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            indent: " ".repeat(self.emit.indent_size),
            nullable_directive: self.emit.nullable,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            out_dir: default_out_dir(),
            manifest_suffix: default_manifest_suffix(),
            emit: EmitConfig::default(),
        }
    }
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            indent_size: default_indent_size(),
            nullable: true,
        }
    }
}

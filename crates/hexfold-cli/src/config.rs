//! Run configuration, loaded from hexfold.yaml

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "hexfold.yaml";

/// Map run configuration. Command-line flags override every field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Directory holding the report documents (`*.json`)
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Clan the map is drawn for
    pub clan: Option<String>,

    /// Where to write the render plan
    pub output: Option<PathBuf>,

    /// Document schema version to accept
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Empty hexes kept around the explored area
    #[serde(default = "default_border")]
    pub border: i32,

    /// Stop before merging when any document fails validation
    #[serde(default = "default_quit_on_invalid_documents")]
    pub quit_on_invalid_documents: bool,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("data/input")
}
fn default_schema_version() -> String {
    hexfold_protocol::SCHEMA_VERSION.to_string()
}
fn default_border() -> i32 {
    hexfold_core::DEFAULT_BORDER
}
fn default_quit_on_invalid_documents() -> bool {
    true
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            clan: None,
            output: None,
            schema_version: default_schema_version(),
            border: default_border(),
            quit_on_invalid_documents: default_quit_on_invalid_documents(),
        }
    }
}

impl MapConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Load `hexfold.yaml` from `dir`, falling back to defaults.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve relative paths against `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        self.input_dir = base.join(&self.input_dir);
        if let Some(output) = &self.output {
            self.output = Some(base.join(output));
        }
    }
}

//! Layered configuration
//!
//! Precedence, lowest first: built-in defaults, the user config file
//! (`<config dir>/stockmaster/config.yaml`), the project config
//! (`.stockmaster/config.yaml`), then environment variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::core::project::Project;
use crate::entities::DEFAULT_MIN_STOCK;

/// Default hosted model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default Generative Language API base URL
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default interpreter request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Written to `.stockmaster/config.yaml` by `stock init`
pub const PROJECT_CONFIG_TEMPLATE: &str = "\
# StockMaster project configuration
#
# interpreter:
#   model: gemini-2.5-flash
#   timeout_secs: 30
#   # api_key is best left to STOCKMASTER_API_KEY or GEMINI_API_KEY
#
inventory:
  low_stock_threshold: 10
";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config in {origin}: {message}")]
    Parse { origin: String, message: String },
}

/// Settings for the natural-language interpreter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    pub model: String,
    pub endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Inventory display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Threshold for products without their own `minStock`
    pub low_stock_threshold: u64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_MIN_STOCK,
        }
    }
}

/// Effective configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub interpreter: InterpreterConfig,
    pub inventory: InventoryConfig,
}

impl Config {
    /// Load every layer for the given project (if any) plus the environment
    pub fn load(project: Option<&Project>) -> Result<Self, ConfigError> {
        let mut layers = Vec::new();
        if let Some(path) = user_config_path() {
            layers.push(path);
        }
        if let Some(project) = project {
            layers.push(project.config_path());
        }

        let mut config = Self::from_files(&layers)?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Merge YAML files in order over the defaults; missing files are skipped
    pub fn from_files(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut merged = serde_yml::Value::Mapping(Default::default());
        for path in paths {
            if let Some(layer) = read_layer(path)? {
                debug!(path = %path.display(), "merging config layer");
                merge_values(&mut merged, layer);
            }
        }
        serde_yml::from_value(merged).map_err(|e| ConfigError::Parse {
            origin: "merged config".to_string(),
            message: e.to_string(),
        })
    }

    /// Parse a single YAML document over the defaults
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yml::from_str(content).map_err(|e| ConfigError::Parse {
            origin: "string".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment overrides through `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty("STOCKMASTER_API_KEY").or_else(|| non_empty("GEMINI_API_KEY")) {
            self.interpreter.api_key = Some(key);
        }
        if let Some(model) = non_empty("STOCKMASTER_MODEL") {
            self.interpreter.model = model;
        }
        if let Some(endpoint) = non_empty("STOCKMASTER_ENDPOINT") {
            self.interpreter.endpoint = endpoint;
        }
        if let Some(secs) = non_empty("STOCKMASTER_TIMEOUT_SECS").and_then(|v| v.trim().parse().ok()) {
            self.interpreter.timeout_secs = secs;
        }
    }
}

/// User-level config file location
pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "stockmaster")
        .map(|dirs| dirs.config_dir().join("config.yaml"))
}

fn read_layer(path: &Path) -> Result<Option<serde_yml::Value>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let value: serde_yml::Value = serde_yml::from_str(&content).map_err(|e| ConfigError::Parse {
        origin: path.display().to_string(),
        message: e.to_string(),
    })?;

    // A file holding only comments parses as null
    Ok(match value {
        serde_yml::Value::Null => None,
        other => Some(other),
    })
}

/// Recursively merge `overlay` into `base`; mappings merge, everything else replaces
fn merge_values(base: &mut serde_yml::Value, overlay: serde_yml::Value) {
    match (base, overlay) {
        (serde_yml::Value::Mapping(base_map), serde_yml::Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

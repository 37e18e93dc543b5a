//! Target lookup table.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::resolver::is_raw_id;

/// A single named target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRecord {
    /// Notion identifier of the page, database or block.
    pub id: String,
    /// Free-form fields carried alongside the id (type, description, ...).
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl TargetRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            metadata: Map::new(),
        }
    }

    /// Value of the optional `type` field.
    pub fn kind(&self) -> Option<&str> {
        self.metadata.get("type").and_then(Value::as_str)
    }

    /// Value of the optional `description` field.
    pub fn description(&self) -> Option<&str> {
        self.metadata.get("description").and_then(Value::as_str)
    }
}

/// Contents of `notion-config.json`.
///
/// Names keep the order they have in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    #[serde(default)]
    pub targets: IndexMap<String, TargetRecord>,
}

impl TargetConfig {
    /// Load the lookup table from a configuration document.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
        }

        debug!("Loading target config from {:?}", path);
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse the lookup table from a JSON string.
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Add a target, replacing any previous record with the same name.
    pub fn with_target(mut self, name: impl Into<String>, record: TargetRecord) -> Self {
        self.targets.insert(name.into(), record);
        self
    }

    /// Get the record for a friendly name.
    pub fn get(&self, name: &str) -> Option<&TargetRecord> {
        self.targets.get(name)
    }

    /// All friendly names, in document order.
    pub fn names(&self) -> Vec<String> {
        self.targets.keys().cloned().collect()
    }

    /// Resolve a friendly name or raw identifier against this table.
    pub fn resolve(&self, name: &str) -> ConfigResult<String> {
        if is_raw_id(name) {
            return Ok(name.to_string());
        }

        self.get(name)
            .map(|record| record.id.clone())
            .ok_or_else(|| ConfigError::UnknownTarget {
                name: name.to_string(),
                available: self.names(),
            })
    }
}

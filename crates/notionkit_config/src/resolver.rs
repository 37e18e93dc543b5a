//! Target resolver.
//!
//! Resolution order:
//! 1. A raw Notion id (32 lowercase hex characters once dashes are removed)
//!    is returned as given, dashes included.
//! 2. Anything else is looked up in the `targets` table of the configuration
//!    document, which is read again on every call.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;

use crate::error::ConfigResult;
use crate::targets::{TargetConfig, TargetRecord};

/// File name of the configuration document in the project root.
pub const CONFIG_FILE_NAME: &str = "notion-config.json";

/// Check whether a string already has the shape of a Notion identifier.
pub fn is_raw_id(name: &str) -> bool {
    let cleaned = name.replace('-', "");
    cleaned.len() == 32 && cleaned.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}

/// Resolves friendly names through a configuration document on disk.
#[derive(Debug, Clone)]
pub struct TargetResolver {
    config_path: PathBuf,
}

impl TargetResolver {
    /// Create a resolver bound to a configuration document.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Create a resolver for `notion-config.json` inside a project root.
    pub fn in_root(root: &Path) -> Self {
        Self::new(root.join(CONFIG_FILE_NAME))
    }

    /// Path of the backing configuration document.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Resolve a friendly name or raw identifier to a Notion id.
    pub fn resolve(&self, name: &str) -> ConfigResult<String> {
        if is_raw_id(name) {
            debug!("Target '{}' is a raw id", name);
            return Ok(name.to_string());
        }

        let id = self.load()?.resolve(name)?;
        debug!("Resolved target '{}' -> {}", name, id);
        Ok(id)
    }

    /// All configured targets, in document order.
    pub fn list(&self) -> ConfigResult<IndexMap<String, TargetRecord>> {
        Ok(self.load()?.targets)
    }

    fn load(&self) -> ConfigResult<TargetConfig> {
        TargetConfig::load(&self.config_path)
    }
}

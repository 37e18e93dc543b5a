//! Error types for target resolution.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading the configuration or resolving targets.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config not found at {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Target '{name}' not found in notion-config.json (available targets: {})", list_names(.available))]
    UnknownTarget {
        name: String,
        available: Vec<String>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn list_names(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_target_lists_names() {
        let err = ConfigError::UnknownTarget {
            name: "nope".to_string(),
            available: vec!["project-db".to_string(), "inbox".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Target 'nope' not found in notion-config.json (available targets: project-db, inbox)"
        );
    }

    #[test]
    fn test_unknown_target_without_names() {
        let err = ConfigError::UnknownTarget {
            name: "nope".to_string(),
            available: Vec::new(),
        };
        assert!(err.to_string().ends_with("(available targets: none)"));
    }
}

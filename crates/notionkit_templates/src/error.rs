//! Error types for templates.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur during template operations.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template '{name}' not found at {}", .path.display())]
    NotFound { name: String, path: PathBuf },

    #[error("Template '{name}' is not valid JSON: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid template document: {0}")]
    InvalidDocument(String),

    #[error("Invalid replacement '{0}': expected KEY=VALUE")]
    InvalidReplacement(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

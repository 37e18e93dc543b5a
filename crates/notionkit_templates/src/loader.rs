//! Template loading functionality.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{TemplateError, TemplateResult};

/// Name of the templates directory in the project root.
pub const TEMPLATES_DIR_NAME: &str = "templates";

/// Loads `<name>.json` documents from a templates directory.
#[derive(Debug, Clone)]
pub struct TemplateLoader {
    templates_path: PathBuf,
}

impl TemplateLoader {
    /// Create a new template loader.
    pub fn new(templates_path: impl Into<PathBuf>) -> Self {
        Self {
            templates_path: templates_path.into(),
        }
    }

    /// Create a loader for the `templates` directory inside a project root.
    pub fn in_root(root: &Path) -> Self {
        Self::new(root.join(TEMPLATES_DIR_NAME))
    }

    pub fn templates_path(&self) -> &Path {
        &self.templates_path
    }

    /// Path where the template with the given name is expected.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.templates_path.join(format!("{}.json", name))
    }

    /// Load a template document by name.
    ///
    /// Each call reads the file again and returns a fresh document.
    pub fn load(&self, name: &str) -> TemplateResult<Value> {
        let path = self.path_for(name);
        if !path.is_file() {
            return Err(TemplateError::NotFound {
                name: name.to_string(),
                path,
            });
        }

        debug!("Loading template from {:?}", path);
        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|source| TemplateError::Parse {
            name: name.to_string(),
            source,
        })
    }

    /// Names of all templates in the directory, sorted.
    pub fn list(&self) -> TemplateResult<Vec<String>> {
        if !self.templates_path.exists() {
            warn!("Templates directory does not exist: {:?}", self.templates_path);
            return Ok(Vec::new());
        }

        let mut names: Vec<String> = WalkDir::new(&self.templates_path)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
            .filter_map(|e| {
                e.path()
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .collect();

        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_loader_empty_dir() {
        let temp = tempdir().unwrap();
        let loader = TemplateLoader::new(temp.path());
        assert!(loader.list().unwrap().is_empty());
    }

    #[test]
    fn test_loader_missing_dir() {
        let temp = tempdir().unwrap();
        let loader = TemplateLoader::new(temp.path().join("absent"));
        assert!(loader.list().unwrap().is_empty());
    }

    #[test]
    fn test_path_for() {
        let loader = TemplateLoader::in_root(Path::new("/work"));
        assert_eq!(
            loader.path_for("project-page"),
            PathBuf::from("/work/templates/project-page.json")
        );
    }

    #[test]
    fn test_load_not_found() {
        let temp = tempdir().unwrap();
        let loader = TemplateLoader::new(temp.path());
        let err = loader.load("missing").unwrap_err();
        assert!(matches!(err, TemplateError::NotFound { ref name, .. } if name == "missing"));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("broken.json"), "{\"a\": ").unwrap();
        let loader = TemplateLoader::new(temp.path());
        assert!(matches!(
            loader.load("broken"),
            Err(TemplateError::Parse { .. })
        ));
    }
}

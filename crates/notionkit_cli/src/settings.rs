//! Locations of the configuration document and templates.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use notionkit_config::{TargetResolver, CONFIG_FILE_NAME};
use notionkit_templates::{TemplateLoader, TEMPLATES_DIR_NAME};

use crate::commands::PathArgs;

/// Paths derived once per invocation and handed to the resolver and loader.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config_path: PathBuf,
    pub templates_path: PathBuf,
}

impl Settings {
    /// Settings rooted at a project directory, with default file names.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_path: root.join(CONFIG_FILE_NAME),
            templates_path: root.join(TEMPLATES_DIR_NAME),
        }
    }

    /// Build settings from command-line arguments.
    ///
    /// The root defaults to the current directory; `--config` and
    /// `--templates` override the paths derived from it.
    pub fn from_args(args: &PathArgs) -> Result<Self> {
        let root = match &args.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };

        let mut settings = Self::for_root(root);
        if let Some(config) = &args.config {
            settings.config_path = config.clone();
        }
        if let Some(templates) = &args.templates {
            settings.templates_path = templates.clone();
        }

        debug!(
            "Using config {:?} and templates {:?}",
            settings.config_path, settings.templates_path
        );
        Ok(settings)
    }

    pub fn resolver(&self) -> TargetResolver {
        TargetResolver::new(&self.config_path)
    }

    pub fn loader(&self) -> TemplateLoader {
        TemplateLoader::new(&self.templates_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_for_root() {
        let settings = Settings::for_root("/work");
        assert_eq!(settings.config_path, PathBuf::from("/work/notion-config.json"));
        assert_eq!(settings.templates_path, PathBuf::from("/work/templates"));
    }

    #[test]
    fn test_overrides() {
        let args = PathArgs {
            root: Some(PathBuf::from("/work")),
            config: Some(PathBuf::from("/etc/notionkit.json")),
            templates: None,
        };
        let settings = Settings::from_args(&args).unwrap();
        assert_eq!(settings.config_path, PathBuf::from("/etc/notionkit.json"));
        assert_eq!(settings.templates_path, PathBuf::from("/work/templates"));
        assert_eq!(settings.resolver().config_path(), Path::new("/etc/notionkit.json"));
    }
}

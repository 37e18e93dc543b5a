//! # notionkit_templates
//!
//! JSON request templates for notionkit.
//!
//! A template is a page or database creation payload stored as
//! `templates/<name>.json`, with `{{PLACEHOLDER}}` tokens inside string values.
//! This crate handles:
//!
//! - Loading templates from the templates directory
//! - Substituting placeholders anywhere in the document tree
//! - Finalizing the request body (parent, icon, stray `object` field)
//!
//! ## Example
//!
//! ```rust,no_run
//! use notionkit_templates::{substitute, Replacements, RequestBody, TemplateLoader};
//!
//! let loader = TemplateLoader::new("templates");
//! let template = loader.load("project-page").unwrap();
//!
//! let replacements = Replacements::new()
//!     .with("PROJECT_NAME", "Apollo")
//!     .with("DATE", "2024-01-01");
//!
//! let body = RequestBody::new(substitute(&template, &replacements))
//!     .parent_page("0123456789abcdef0123456789abcdef")
//!     .icon("🚀")
//!     .build()
//!     .unwrap();
//! ```

pub mod body;
pub mod error;
pub mod loader;
pub mod renderer;

pub use body::{default_database_body, default_page_body, RequestBody, DEFAULT_ICON};
pub use error::{TemplateError, TemplateResult};
pub use loader::{TemplateLoader, TEMPLATES_DIR_NAME};
pub use renderer::{substitute, substitute_str, Replacements, TemplateRenderer};

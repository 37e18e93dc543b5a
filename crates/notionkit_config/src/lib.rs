//! # notionkit_config
//!
//! Target resolution for notionkit.
//!
//! A target is what a command operates on: a page, database or block in the
//! remote workspace. Users may pass either a raw Notion identifier or a
//! friendly name declared in `notion-config.json`:
//!
//! ```json
//! {
//!   "targets": {
//!     "project-db": { "id": "0123456789abcdef0123456789abcdef", "type": "database" }
//!   }
//! }
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use notionkit_config::TargetResolver;
//!
//! let resolver = TargetResolver::new("notion-config.json");
//! let id = resolver.resolve("project-db").unwrap();
//! println!("{id}");
//! ```

pub mod error;
pub mod resolver;
pub mod targets;

pub use error::{ConfigError, ConfigResult};
pub use resolver::{is_raw_id, TargetResolver, CONFIG_FILE_NAME};
pub use targets::{TargetConfig, TargetRecord};

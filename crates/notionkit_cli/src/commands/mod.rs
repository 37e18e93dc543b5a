//! CLI command definitions.
//!
//! Every command that talks to Notion accepts `--target`, which may be a
//! friendly name from `notion-config.json` or a raw Notion id.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use notionkit_templates::Replacements;

pub mod append_blocks;
pub mod create_db;
pub mod create_page;
pub mod create_project;
pub mod get_page;
pub mod query_db;
pub mod targets;
pub mod templates;
pub mod update_page;

/// notionkit - Notion pages and databases from templates
#[derive(Parser)]
#[command(name = "notionkit")]
#[command(version, about = "notionkit - Notion pages and databases from templates")]
#[command(long_about = r#"
notionkit wraps the Notion API to create and update pages, databases and
blocks from JSON templates, addressing them by friendly names declared in
notion-config.json.

COMMANDS:
  create-page     → Create a page under a parent (optionally from a template)
  create-db       → Create a database under a parent page
  update-page     → Update properties on an existing page
  query-db        → Query a database with optional filter and sorts
  append-blocks   → Append content blocks to a page
  get-page        → Retrieve a page and its properties
  create-project  → Create a project page from the project-page template
  targets         → List friendly names from notion-config.json
  templates       → List available templates

ENVIRONMENT:
  NOTION_API_TOKEN     Integration token (required for API commands)
  NOTION_API_BASE_URL  Override the API endpoint
  NOTIONKIT_ROOT       Directory holding notion-config.json and templates/

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments or malformed JSON
  3 - Configuration error
  4 - Template error
  5 - Notion API error
  6 - Missing credential
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(flatten)]
    pub paths: PathArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the configuration document and templates live.
#[derive(Args, Debug, Clone, Default)]
pub struct PathArgs {
    /// Project root containing notion-config.json and templates/
    #[arg(long, global = true, env = "NOTIONKIT_ROOT")]
    pub root: Option<PathBuf>,

    /// Path to the target configuration (overrides <root>/notion-config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Templates directory (overrides <root>/templates)
    #[arg(long, global = true)]
    pub templates: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new page under a parent
    #[command(name = "create-page")]
    CreatePage(create_page::CreatePageArgs),

    /// Create a new database under a parent
    #[command(name = "create-db")]
    CreateDb(create_db::CreateDbArgs),

    /// Update properties on an existing page
    #[command(name = "update-page")]
    UpdatePage(update_page::UpdatePageArgs),

    /// Query a database
    #[command(name = "query-db")]
    QueryDb(query_db::QueryDbArgs),

    /// Append content blocks to a page
    #[command(name = "append-blocks")]
    AppendBlocks(append_blocks::AppendBlocksArgs),

    /// Retrieve a page and its properties
    #[command(name = "get-page")]
    GetPage(get_page::GetPageArgs),

    /// Create a project page from a template
    #[command(name = "create-project")]
    CreateProject(create_project::CreateProjectArgs),

    /// List configured targets
    Targets(targets::TargetsArgs),

    /// List available templates
    Templates(templates::TemplatesArgs),
}

/// Parser for repeatable `--var KEY=VALUE` flags.
pub fn parse_var(pair: &str) -> Result<(String, String), notionkit_templates::TemplateError> {
    Replacements::parse_pair(pair)
}

/// Replacements available to every template: today's date, then `--var` pairs.
pub fn base_replacements(vars: &[(String, String)]) -> Replacements {
    let mut replacements = Replacements::new().with("DATE", today());
    replacements.extend(vars.iter().cloned());
    replacements
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    chrono::Local::now().date_naive().to_string()
}

/// Print an API result as pretty JSON on stdout.
pub fn print_json(value: &Value) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{}", output);
    Ok(())
}

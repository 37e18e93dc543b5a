//! Query-db command - Query a database with optional filter and sorts.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use tracing::info;

use notionkit_api::{DatabaseQuery, NotionApi};

use crate::input::parse_json_arg;
use crate::settings::Settings;

#[derive(Args, Debug)]
pub struct QueryDbArgs {
    /// Friendly name or Notion database ID
    #[arg(long)]
    pub target: String,

    /// JSON filter object
    #[arg(long)]
    pub filter: Option<String>,

    /// JSON sorts array
    #[arg(long)]
    pub sorts: Option<String>,
}

pub async fn execute<C>(args: QueryDbArgs, settings: &Settings, client: &C) -> Result<Value>
where
    C: NotionApi + ?Sized,
{
    let mut query = DatabaseQuery::new();
    if let Some(filter) = &args.filter {
        query = query.filter(parse_json_arg("--filter", filter)?);
    }
    if let Some(sorts) = &args.sorts {
        query = query.sorts(parse_json_arg("--sorts", sorts)?);
    }

    let database_id = settings
        .resolver()
        .resolve(&args.target)
        .context("Failed to resolve database target")?;

    info!("Querying database {}", args.target);
    let result = client.query_database(&database_id, &query).await?;
    Ok(result)
}

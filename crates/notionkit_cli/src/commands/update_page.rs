//! Update-page command - Update properties on an existing page.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use tracing::info;

use notionkit_api::NotionApi;

use crate::input::parse_json_arg;
use crate::settings::Settings;

#[derive(Args, Debug)]
pub struct UpdatePageArgs {
    /// Friendly name or Notion page ID
    #[arg(long)]
    pub target: String,

    /// JSON object of properties to update
    #[arg(long)]
    pub properties: String,
}

pub async fn execute<C>(args: UpdatePageArgs, settings: &Settings, client: &C) -> Result<Value>
where
    C: NotionApi + ?Sized,
{
    let properties = parse_json_arg("--properties", &args.properties)?;
    let page_id = settings
        .resolver()
        .resolve(&args.target)
        .context("Failed to resolve page target")?;

    info!("Updating page {}", args.target);
    let result = client.update_page(&page_id, &properties).await?;
    Ok(result)
}

//! Get-page command - Retrieve a page and its properties.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use tracing::info;

use notionkit_api::NotionApi;

use crate::settings::Settings;

#[derive(Args, Debug)]
pub struct GetPageArgs {
    /// Friendly name or Notion page ID
    #[arg(long)]
    pub target: String,
}

pub async fn execute<C>(args: GetPageArgs, settings: &Settings, client: &C) -> Result<Value>
where
    C: NotionApi + ?Sized,
{
    let page_id = settings
        .resolver()
        .resolve(&args.target)
        .context("Failed to resolve page target")?;

    info!("Retrieving page {}", args.target);
    let page = client.retrieve_page(&page_id).await?;
    Ok(page)
}

//! Append-blocks command - Append content blocks to a page.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use tracing::info;

use notionkit_api::NotionApi;

use crate::input::parse_json_arg;
use crate::settings::Settings;

#[derive(Args, Debug)]
pub struct AppendBlocksArgs {
    /// Friendly name or Notion page ID
    #[arg(long)]
    pub target: String,

    /// JSON array of block objects
    #[arg(long)]
    pub blocks: String,
}

pub async fn execute<C>(args: AppendBlocksArgs, settings: &Settings, client: &C) -> Result<Value>
where
    C: NotionApi + ?Sized,
{
    let children = parse_json_arg("--blocks", &args.blocks)?;
    let block_id = settings
        .resolver()
        .resolve(&args.target)
        .context("Failed to resolve page target")?;

    info!("Appending blocks to {}", args.target);
    let result = client.append_blocks(&block_id, &children).await?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notionkit_api::MockNotionClient;
    use serde_json::json;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_append_blocks() {
        let dir = tempdir().unwrap();
        let settings = Settings::for_root(dir.path());
        let client = MockNotionClient::new();
        let blocks = json!([
            {"object": "block", "type": "paragraph",
             "paragraph": {"rich_text": [{"type": "text", "text": {"content": "Hello"}}]}}
        ]);
        let args = AppendBlocksArgs {
            target: "0123456789abcdef0123456789abcdef".to_string(),
            blocks: blocks.to_string(),
        };

        execute(args, &settings, &client).await.unwrap();

        let call = client.last_call().unwrap();
        assert_eq!(call.method, "append_blocks");
        assert_eq!(call.payload, Some(blocks));
    }

    #[tokio::test]
    async fn test_missing_config_for_friendly_name() {
        let dir = tempdir().unwrap();
        let settings = Settings::for_root(dir.path());
        let client = MockNotionClient::new();
        let args = AppendBlocksArgs {
            target: "journal".to_string(),
            blocks: "[]".to_string(),
        };

        let err = execute(args, &settings, &client).await.unwrap_err();
        assert!(format!("{:#}", err).contains("Config not found"));
        assert_eq!(client.call_count(), 0);
    }
}

//! Create-db command - Create a database under a parent page.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use tracing::info;

use notionkit_api::NotionApi;
use notionkit_templates::{default_database_body, RequestBody, TemplateRenderer};

use super::{base_replacements, parse_var};
use crate::settings::Settings;

#[derive(Args, Debug)]
pub struct CreateDbArgs {
    /// Friendly name or Notion page ID of the parent
    #[arg(long)]
    pub target: String,

    /// Template name from templates/
    #[arg(long)]
    pub template: Option<String>,

    /// Database title (ignored when using a template)
    #[arg(long)]
    pub title: Option<String>,

    /// Emoji icon for the database
    #[arg(long)]
    pub icon: Option<String>,

    /// Template placeholder value (repeatable)
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,
}

pub async fn execute<C>(args: CreateDbArgs, settings: &Settings, client: &C) -> Result<Value>
where
    C: NotionApi + ?Sized,
{
    let parent_id = settings
        .resolver()
        .resolve(&args.target)
        .context("Failed to resolve parent target")?;

    let document = match &args.template {
        Some(name) => {
            let template = settings.loader().load(name)?;
            info!("Using template: {}", name);
            TemplateRenderer::new().render(&template, &base_replacements(&args.vars))
        }
        None => default_database_body(args.title.as_deref()),
    };

    let mut body = RequestBody::new(document).parent_page(parent_id);
    if let Some(icon) = args.icon {
        body = body.icon(icon);
    }
    let body = body.build()?;

    info!("Creating database under {}", args.target);
    let result = client.create_database(&body).await?;
    Ok(result)
}

//! Templates command - List available templates and their placeholders.

use anyhow::Result;
use clap::Args;
use tracing::warn;

use notionkit_templates::{TemplateLoader, TemplateRenderer};

use crate::settings::Settings;

#[derive(Args, Debug)]
pub struct TemplatesArgs {
    /// Show the placeholders each template expects
    #[arg(long)]
    pub placeholders: bool,
}

pub fn execute(args: TemplatesArgs, settings: &Settings) -> Result<()> {
    let loader = settings.loader();
    let names = loader.list()?;

    if names.is_empty() {
        println!("No templates found in {}", loader.templates_path().display());
        return Ok(());
    }

    if !args.placeholders {
        for name in &names {
            println!("{}", name);
        }
        return Ok(());
    }

    let renderer = TemplateRenderer::new();
    for name in &names {
        println!("{}", describe(&loader, &renderer, name));
    }
    Ok(())
}

/// `name: A, B` line for a template; unreadable templates are reported and listed bare.
fn describe(loader: &TemplateLoader, renderer: &TemplateRenderer, name: &str) -> String {
    match loader.load(name) {
        Ok(template) => {
            let placeholders: Vec<String> = renderer.placeholders(&template).into_iter().collect();
            if placeholders.is_empty() {
                format!("{}: (no placeholders)", name)
            } else {
                format!("{}: {}", name, placeholders.join(", "))
            }
        }
        Err(e) => {
            warn!("Failed to load template {}: {}", name, e);
            format!("{}: (invalid)", name)
        }
    }
}

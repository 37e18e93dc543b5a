//! Targets command - List friendly names from notion-config.json.

use anyhow::{Context, Result};
use clap::Args;
use indexmap::IndexMap;

use notionkit_config::TargetRecord;

use crate::settings::Settings;

#[derive(Args, Debug)]
pub struct TargetsArgs {
    /// Print targets as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: TargetsArgs, settings: &Settings) -> Result<()> {
    let targets = settings.resolver().list()?;

    if args.json {
        println!("{}", targets_json(&targets)?);
        return Ok(());
    }

    if targets.is_empty() {
        println!("No targets configured in {}", settings.config_path.display());
        return Ok(());
    }

    for line in format_rows(targets.iter()) {
        println!("{}", line);
    }
    Ok(())
}

/// Targets as a JSON object in document order, each record as `{id, ...metadata}`.
fn targets_json(targets: &IndexMap<String, TargetRecord>) -> Result<String> {
    serde_json::to_string_pretty(targets).context("Failed to serialize targets")
}

/// One aligned `name  id  type` line per target.
fn format_rows<'a>(targets: impl Iterator<Item = (&'a String, &'a TargetRecord)>) -> Vec<String> {
    let rows: Vec<(&str, &str, &str)> = targets
        .map(|(name, record)| {
            (
                name.as_str(),
                record.id.as_str(),
                record.kind().unwrap_or("-"),
            )
        })
        .collect();

    let name_width = rows.iter().map(|(n, _, _)| n.len()).max().unwrap_or(0);
    let id_width = rows.iter().map(|(_, i, _)| i.len()).max().unwrap_or(0);

    rows.iter()
        .map(|(name, id, kind)| {
            format!(
                "{:<name_width$}  {:<id_width$}  {}",
                name,
                id,
                kind,
                name_width = name_width,
                id_width = id_width
            )
        })
        .collect()
}

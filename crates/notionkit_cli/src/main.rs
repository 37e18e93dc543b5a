//! notionkit CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments or malformed JSON input
//! - 3: Configuration error (missing config, unknown target)
//! - 4: Template error
//! - 5: Notion API error
//! - 6: Missing credential

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod input;
mod settings;

use commands::{Cli, Commands};
use input::MalformedInput;
use notionkit_api::{ApiError, ApiResult, NotionClient};
use notionkit_config::ConfigError;
use notionkit_templates::TemplateError;
use settings::Settings;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_INPUT: u8 = 2;
    pub const CONFIG_ERROR: u8 = 3;
    pub const TEMPLATE_ERROR: u8 = 4;
    pub const API_ERROR: u8 = 5;
    pub const MISSING_CREDENTIAL: u8 = 6;
}

#[tokio::main]
async fn main() -> ExitCode {
    // Variables already set in the environment win over .env
    let dotenv_result = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Some(message) = dotenv_warning(&dotenv_result) {
        warn!("{}", message);
    }

    match run(cli, NotionClient::from_env).await {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "info"
    };

    let mut filter = EnvFilter::from_default_env().add_directive(LevelFilter::WARN.into());
    if let Ok(directive) = format!("notionkit={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    // Logs go to stderr; stdout carries command output only
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }
}

/// A missing .env file is normal; anything else is worth reporting.
fn dotenv_warning(result: &dotenvy::Result<PathBuf>) -> Option<String> {
    match result {
        Err(e) if !e.not_found() => Some(format!("Failed to load .env: {}", e)),
        _ => None,
    }
}

async fn run<F>(cli: Cli, connect: F) -> anyhow::Result<()>
where
    F: Fn() -> ApiResult<NotionClient>,
{
    let settings = Settings::from_args(&cli.paths)?;

    match cli.command {
        Commands::CreatePage(args) => {
            let client = connect()?;
            let result = commands::create_page::execute(args, &settings, &client).await?;
            commands::print_json(&result)
        }
        Commands::CreateDb(args) => {
            let client = connect()?;
            let result = commands::create_db::execute(args, &settings, &client).await?;
            commands::print_json(&result)
        }
        Commands::UpdatePage(args) => {
            let client = connect()?;
            let result = commands::update_page::execute(args, &settings, &client).await?;
            commands::print_json(&result)
        }
        Commands::QueryDb(args) => {
            let client = connect()?;
            let result = commands::query_db::execute(args, &settings, &client).await?;
            commands::print_json(&result)
        }
        Commands::AppendBlocks(args) => {
            let client = connect()?;
            let result = commands::append_blocks::execute(args, &settings, &client).await?;
            commands::print_json(&result)
        }
        Commands::GetPage(args) => {
            let client = connect()?;
            let result = commands::get_page::execute(args, &settings, &client).await?;
            commands::print_json(&result)
        }
        Commands::CreateProject(args) => {
            let client = connect()?;
            let json = args.json;
            let result = commands::create_project::execute(args, &settings, &client).await?;
            if json {
                commands::print_json(&result)
            } else {
                commands::create_project::print_summary(&result);
                Ok(())
            }
        }
        Commands::Targets(args) => commands::targets::execute(args, &settings),
        Commands::Templates(args) => commands::templates::execute(args, &settings),
    }
}

/// Map the root cause of an error to an exit code.
fn categorize_error(e: &anyhow::Error) -> u8 {
    for cause in e.chain() {
        if let Some(err) = cause.downcast_ref::<ApiError>() {
            return match err {
                ApiError::MissingCredential => ExitCodes::MISSING_CREDENTIAL,
                _ => ExitCodes::API_ERROR,
            };
        }
        if cause.downcast_ref::<ConfigError>().is_some() {
            return ExitCodes::CONFIG_ERROR;
        }
        if let Some(err) = cause.downcast_ref::<TemplateError>() {
            return match err {
                TemplateError::InvalidReplacement(_) => ExitCodes::INVALID_INPUT,
                _ => ExitCodes::TEMPLATE_ERROR,
            };
        }
        if cause.downcast_ref::<MalformedInput>().is_some() {
            return ExitCodes::INVALID_INPUT;
        }
    }

    ExitCodes::GENERAL_ERROR
}

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scrutin_core::config::{EtlConfig, DEFAULT_CONFIG_PATH};
use scrutin_core::pipeline;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Clean and load French election, unemployment and security datasets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full extract, clean and load pipeline (default)
    Run,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => handle_run(),
    }
}

fn handle_run() -> Result<()> {
    let config_path = env::var("SCRUTIN_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

    let config = EtlConfig::from_path(&config_path)
        .with_context(|| format!("failed to load configuration from {}", config_path.display()))?;

    let summary = pipeline::run(&config).context("pipeline run failed")?;

    info!(
        summary = %serde_json::to_string(&summary)?,
        "pipeline finished"
    );
    Ok(())
}

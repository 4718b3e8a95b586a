//! Earmark CLI - Voice expense parser
//!
//! Usage:
//!   earmark parse spent 8k on rent   Parse one utterance
//!   earmark check $50 for lunch      Validate an utterance (exit 1 on failure)
//!   earmark batch --file lines.txt   Parse a transcript file
//!   earmark suggestions              Show phrasings that parse well

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Parse {
            text,
            json,
            max_amount,
        } => commands::cmd_parse(&text.join(" "), json, max_amount),
        Commands::Check { text, max_amount } => commands::cmd_check(&text.join(" "), max_amount),
        Commands::Batch {
            file,
            json,
            max_amount,
        } => commands::cmd_batch(&file, json, max_amount),
        Commands::Suggestions => commands::cmd_suggestions(),
        Commands::Categories { name } => commands::cmd_categories(name.as_deref()),
    }
}

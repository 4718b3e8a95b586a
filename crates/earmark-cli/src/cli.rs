//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Earmark - Turn spoken expenses into structured records
#[derive(Parser)]
#[command(name = "earmark")]
#[command(about = "Voice expense parser for transcribed speech", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse one transcribed utterance into an expense
    Parse {
        /// Transcribed text, e.g. "spent 8k on rent"
        ///
        /// Multiple words are joined with spaces, so quoting is optional:
        /// `earmark parse spent 8k on rent` works as-is.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Emit the result and validation verdict as JSON
        #[arg(long)]
        json: bool,

        /// Override the upper amount bound used by validation
        #[arg(long)]
        max_amount: Option<f64>,
    },

    /// Parse an utterance and exit non-zero if it fails validation
    Check {
        /// Transcribed text to check
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Override the upper amount bound used by validation
        #[arg(long)]
        max_amount: Option<f64>,
    },

    /// Parse a file of transcriptions, one utterance per line
    Batch {
        /// Transcript file to parse
        #[arg(short, long)]
        file: PathBuf,

        /// Emit all results as a JSON array
        #[arg(long)]
        json: bool,

        /// Override the upper amount bound used by validation
        #[arg(long)]
        max_amount: Option<f64>,
    },

    /// Show example phrasings the parser handles well
    Suggestions,

    /// List expense categories and their keywords
    Categories {
        /// Show only this category, e.g. "food"
        name: Option<String>,
    },
}

//! Command line argument parsing for the sapor CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sapor - a compact tf-idf search engine for dish and cuisine records
#[derive(Parser, Debug, Clone)]
#[command(name = "sapor")]
#[command(about = "A compact tf-idf search engine for dish and cuisine records")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SaporArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SaporArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search a corpus
    Search(SearchArgs),

    /// Show corpus and vocabulary statistics
    Stats(StatsArgs),
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the corpus CSV file
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus_file: PathBuf,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of results to return
    #[arg(short, long, default_value = "3")]
    pub limit: usize,

    /// Minimum score a result must exceed
    #[arg(long, default_value = "0.1")]
    pub min_score: f32,

    /// Correction candidates (comma-separated; empty disables correction)
    #[arg(long, value_delimiter = ',')]
    pub candidates: Vec<String>,

    /// Score a candidate must reach to replace the query (0-100)
    #[arg(long, default_value = "80")]
    pub threshold: f32,
}

/// Arguments for corpus statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the corpus CSV file
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus_file: PathBuf,

    /// Include the most frequent terms
    #[arg(short, long)]
    pub detailed: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

//! Command line interface for the sapor search engine.

pub mod args;
pub mod commands;
pub mod loader;
pub mod output;

// Re-export commonly used types
pub use args::{Command, OutputFormat, SaporArgs, SearchArgs, StatsArgs};
pub use commands::execute_command;
pub use loader::load_records;
pub use output::{CorpusStats, HitOutput, SearchResults, TermCount};

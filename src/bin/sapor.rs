//! Sapor CLI binary.

use clap::Parser;
use sapor::cli::args::SaporArgs;
use sapor::cli::commands::execute_command;
use std::process;

fn main() {
    let args = SaporArgs::parse();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

//! AOC CLI - Command-line interface for scaffolding, testing and running puzzles

mod cli;
mod config;
mod error;
mod executor;
mod output;

// Import aoc-solutions to link the puzzle plugins
use aoc_solutions as _;

use aoc_harness::{PuzzleRegistry, RegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;

fn main() {
    // Logs go to stderr; default to warnings so command output stays clean
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args);
    if !config.color {
        colored::control::set_override(false);
    }

    let registry = build_registry()?;
    Executor::new(&registry, &config).execute()
}

/// Build the registry from every linked solution module
fn build_registry() -> Result<PuzzleRegistry, error::CliError> {
    Ok(RegistryBuilder::new().register_all_plugins()?.build())
}

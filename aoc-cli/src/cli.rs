//! CLI argument parsing using clap
//!
//! Identifier arguments are taken as raw text and validated by the harness so
//! that bad values produce its validation errors.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Advent of Code puzzle harness
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Scaffold, test and run Advent of Code puzzles", version)]
pub struct Args {
    /// Directory holding `{year}/{dd}.rs` modules and `{year}/inputs/{dd}.txt` inputs
    /// (defaults to the solutions crate sources)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the module template and an empty input file if missing
    Init {
        /// Day (1-25)
        #[arg(allow_negative_numbers = true)]
        day: String,
        /// Year (defaults to this year in December, last year otherwise)
        #[arg(allow_negative_numbers = true)]
        year: Option<String>,
    },
    /// Run the module's self-test cases
    Test {
        /// Day (1-25)
        #[arg(allow_negative_numbers = true)]
        day: String,
        /// Year (defaults to this year in December, last year otherwise)
        #[arg(allow_negative_numbers = true)]
        year: Option<String>,
    },
    /// Run one part against the puzzle input
    Run {
        /// Day (1-25)
        #[arg(allow_negative_numbers = true)]
        day: String,
        /// Part (1 or 2)
        #[arg(default_value = "1", allow_negative_numbers = true)]
        part: String,
        /// Year (defaults to this year in December, last year otherwise)
        #[arg(allow_negative_numbers = true)]
        year: Option<String>,
    },
}

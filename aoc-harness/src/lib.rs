//! Advent of Code Harness Library
//!
//! Resolves puzzle modules and inputs by year and day, scaffolds missing days,
//! runs a module's self-test cases and runs a part against the real input.
//!
//! # Overview
//!
//! This library provides:
//! - Validation of year, day and part arguments
//! - A fixed filesystem layout (`{root}/{year}/{dd}.rs`, `{root}/{year}/inputs/{dd}.txt`)
//! - A registry of puzzle modules collected at link time
//! - A scaffolder that never overwrites existing files
//! - A test runner that isolates each case and reports timing
//! - A run executor that times a single part against real input
//!
//! # Quick Example
//!
//! ```
//! use aoc_harness::{case, run_tests, Answer, PuzzleModule, RegistryBuilder, TestCase};
//!
//! fn part1(input: &str) -> i64 {
//!     input.chars().map(|c| if c == '(' { 1 } else { -1 }).sum()
//! }
//!
//! fn tests() -> Vec<TestCase> {
//!     vec![case!(part1("(()"), 1), case!(part1("))"), -2)]
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register(2015, 1, PuzzleModule {
//!         part1: |input| Ok(Answer::from(part1(input))),
//!         part2: |_| anyhow::bail!("not solved"),
//!         tests,
//!     })
//!     .unwrap()
//!     .build();
//!
//! let module = registry.get(2015, 1).unwrap();
//! assert!(run_tests((module.tests)()).all(|report| report.passed()));
//! ```
//!
//! # Module Contract
//!
//! A module file exposes `part1(&str)`, `part2(&str)` returning anything that
//! implements [`IntoOutcome`], and `tests() -> Vec<TestCase>`. The solutions
//! crate registers each file with [`register_puzzle!`].

mod answer;
mod error;
mod ident;
mod input;
mod isolate;
mod module;
mod paths;
mod registry;
mod run;
mod scaffold;
mod style;
mod test_runner;

// Re-export public API
pub use answer::{Answer, IntoOutcome};
pub use error::{
    CaseError, Field, InputError, LoadError, RegistrationError, RunError, ScaffoldError,
    ValidationError,
};
pub use ident::{
    DAYS_PER_YEAR, FIRST_YEAR, Part, PuzzleId, default_year, default_year_on, resolve_id,
    validate_day, validate_part, validate_year, validate_year_on,
};
pub use input::load_input;
pub use isolate::call_isolated;
pub use module::{PartFn, PuzzleModule, TestCase};
pub use paths::{PuzzlePaths, input_path, module_path};
pub use registry::{PuzzlePlugin, PuzzleRegistry, RegistryBuilder};
pub use run::{RunOutcome, run_part};
pub use scaffold::{FileAction, MODULE_TEMPLATE, ScaffoldReport, scaffold};
pub use style::format_millis;
pub use test_runner::{CaseOutcome, TestReport, dedent, display_name, run_case, run_tests};

// Re-export inventory for use by `register_puzzle!`
pub use inventory;

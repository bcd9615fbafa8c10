//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Bad year, day or part argument
    #[error("Invalid argument: {0}")]
    Validation(#[from] aoc_harness::ValidationError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_harness::RegistrationError),

    /// Module exists but cannot be loaded
    #[error("Load error: {0}")]
    Load(#[from] aoc_harness::LoadError),

    /// Input exists but cannot be read
    #[error("Input error: {0}")]
    Input(#[from] aoc_harness::InputError),

    /// Scaffolding failed
    #[error("Scaffold error: {0}")]
    Scaffold(#[from] aoc_harness::ScaffoldError),
}

impl From<aoc_harness::RunError> for CliError {
    fn from(e: aoc_harness::RunError) -> Self {
        match e {
            aoc_harness::RunError::Load(e) => CliError::Load(e),
            aoc_harness::RunError::Input(e) => CliError::Input(e),
        }
    }
}

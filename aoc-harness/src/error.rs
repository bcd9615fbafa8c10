//! Error types for the harness library

use std::path::PathBuf;
use thiserror::Error;

/// Which identifier a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Year,
    Day,
    Part,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Year => "year",
            Field::Day => "day",
            Field::Part => "part",
        };
        f.write_str(name)
    }
}

/// Error type for year/day/part arguments
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The token is not a base-10 integer
    #[error("Expected {field} to be a number. Got {raw:?}")]
    NotANumber { field: Field, raw: String },
    /// Year outside 2015..=current year
    #[error("Year must be between {min} and {max}. Got {year}")]
    YearOutOfRange { year: String, min: u16, max: i32 },
    /// Day outside 1..=25
    #[error("Day must be between 1 and 25 inclusive. Got {0}")]
    DayOutOfRange(String),
    /// Part other than 1 or 2
    #[error("Part must be 1 or 2. Got {0}")]
    PartOutOfRange(String),
}

/// Error type for registration failures while building the registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Two modules registered for the same year-day combination
    #[error("Duplicate puzzle registration for year {0} day {1}")]
    DuplicatePuzzle(u16, u8),
    /// A module registered for a year or day the harness cannot address
    #[error("Invalid puzzle registration for year {0} day {1}")]
    InvalidYearDay(u16, u8),
}

/// Error type for module lookups that found something they could not load
#[derive(Debug, Error)]
pub enum LoadError {
    /// The module file exists but was not compiled into this binary
    #[error(
        "Module file {} exists but is not compiled into this binary; rebuild to pick it up",
        .0.display()
    )]
    NotCompiled(PathBuf),
    /// The module path could not be inspected
    #[error("Failed to inspect module {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error type for reading puzzle input
#[derive(Debug, Error)]
#[error("Failed to read input {}: {source}", .path.display())]
pub struct InputError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Error type for scaffolding failures
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Parent directory creation failed
    #[error("Failed to create directory {}: {source}", .path.display())]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing the scaffolded file failed
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fatal errors while preparing a run
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Failure raised by a test thunk or a part function
#[derive(Debug, Error)]
pub enum CaseError {
    /// The callable returned an error
    #[error("{0:?}")]
    Failed(anyhow::Error),
    /// The callable panicked
    #[error("panicked{}: {message}", at_location(.location))]
    Panicked {
        message: String,
        location: Option<String>,
    },
}

fn at_location(location: &Option<String>) -> String {
    location
        .as_deref()
        .map(|l| format!(" at {l}"))
        .unwrap_or_default()
}

//! Filesystem layout for puzzle modules and inputs
//!
//! Directory structure under a root:
//! - `{root}/{year}/{day:02}.rs` for the module source
//! - `{root}/{year}/inputs/{day:02}.txt` for the raw puzzle input

use crate::ident::PuzzleId;
use std::path::{Path, PathBuf};

/// File extension of puzzle modules
pub const MODULE_EXTENSION: &str = "rs";
/// Directory (inside a year directory) holding inputs
pub const INPUTS_DIR: &str = "inputs";

/// Module and input locations for one puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzlePaths {
    pub module: PathBuf,
    pub input: PathBuf,
}

impl PuzzlePaths {
    pub fn resolve(root: &Path, id: PuzzleId) -> Self {
        Self {
            module: module_path(root, id.year, id.day),
            input: input_path(root, id.year, id.day),
        }
    }
}

/// Path of the module source for a year/day
pub fn module_path(root: &Path, year: u16, day: u8) -> PathBuf {
    root.join(year.to_string())
        .join(format!("{:02}.{}", day, MODULE_EXTENSION))
}

/// Path of the raw input for a year/day
pub fn input_path(root: &Path, year: u16, day: u8) -> PathBuf {
    root.join(year.to_string())
        .join(INPUTS_DIR)
        .join(format!("{:02}.txt", day))
}

//! Advent of Code puzzle solutions with automatic registration
//!
//! Each solution lives at `src/{year}/{dd}.rs` and exposes `part1`, `part2` and
//! `tests`. The build script turns every such file into a module and registers
//! it with the harness, so a file created by `aoc init` is picked up on the next
//! build without touching this crate's sources.

use std::path::Path;

/// Root of the `{year}/{dd}.rs` layout
pub const SOURCE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src");

pub fn source_dir() -> &'static Path {
    Path::new(SOURCE_DIR)
}

include!(concat!(env!("OUT_DIR"), "/puzzles.rs"));

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_harness::{RegistryBuilder, module_path, run_tests};

    #[test]
    fn test_every_module_file_is_registered() {
        let registry = RegistryBuilder::new()
            .register_all_plugins()
            .expect("Failed to register plugins")
            .build();

        assert!(!registry.is_empty());
        for (year, day) in registry.iter_ids() {
            assert!(module_path(source_dir(), year, day).is_file());
        }
    }

    #[test]
    fn test_all_self_tests_pass() {
        let registry = RegistryBuilder::new()
            .register_all_plugins()
            .unwrap()
            .build();

        for (year, day) in registry.iter_ids() {
            let module = registry.get(year, day).unwrap();
            for report in run_tests((module.tests)()) {
                assert!(report.passed(), "{year}/{day:02}: {}", report.render());
            }
        }
    }
}

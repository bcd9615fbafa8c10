//! Discovers `src/{year}/{dd}.rs` puzzle modules and registers each one.
//!
//! Writes `$OUT_DIR/puzzles.rs`, included by `lib.rs`, with one module
//! declaration and one `register_puzzle!` invocation per file.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let src = Path::new(&manifest_dir).join("src");
    println!("cargo:rerun-if-changed={}", src.display());

    let mut generated = String::new();
    for (year, day, path) in discover(&src) {
        let module = format!("y{}_d{:02}", year, day);
        writeln!(generated, "#[path = {:?}]", path.display().to_string()).unwrap();
        writeln!(generated, "mod {};", module).unwrap();
        writeln!(
            generated,
            "aoc_harness::register_puzzle!({}, {}, {});",
            year, day, module
        )
        .unwrap();
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    fs::write(out_dir.join("puzzles.rs"), generated).expect("Failed to write puzzles.rs");
}

/// Year directories are four digits, module files are `01.rs` through `25.rs`
fn discover(src: &Path) -> Vec<(u16, u8, PathBuf)> {
    let mut found = Vec::new();
    for year_dir in read_dir_sorted(src) {
        let Some(year) = year_dir
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| n.len() == 4)
            .and_then(|n| n.parse::<u16>().ok())
        else {
            continue;
        };
        if !year_dir.is_dir() {
            continue;
        }

        for file in read_dir_sorted(&year_dir) {
            let day = file
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(|n| n.strip_suffix(".rs"))
                .filter(|stem| stem.len() == 2)
                .and_then(|stem| stem.parse::<u8>().ok())
                .filter(|day| (1..=25).contains(day));
            if let Some(day) = day
                && file.is_file()
            {
                found.push((year, day, file));
            }
        }
    }
    found
}

fn read_dir_sorted(dir: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<PathBuf> = match fs::read_dir(dir) {
        Ok(entries) => entries.filter_map(|e| e.ok().map(|e| e.path())).collect(),
        Err(_) => Vec::new(),
    };
    entries.sort();
    entries
}

//! Configuration resolution from CLI args

use crate::cli::{Args, Command};
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
pub struct Config {
    /// Root of the module/input layout
    pub root: PathBuf,
    /// Whether to decorate output with colors
    pub color: bool,
    /// The subcommand to run
    pub command: Command,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Self {
        let root = args
            .root
            .map(|root| expand_tilde(&root))
            .unwrap_or_else(|| aoc_solutions::source_dir().to_path_buf());

        Config {
            root,
            color: !args.no_color,
            command: args.command,
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_root_defaults_to_solutions_sources() {
        let config = Config::from_args(Args::parse_from(["aoc", "test", "1"]));
        assert_eq!(config.root, aoc_solutions::source_dir());
        assert!(config.color);
    }

    #[test]
    fn test_explicit_root_and_no_color() {
        let config = Config::from_args(Args::parse_from([
            "aoc",
            "--no-color",
            "--root",
            "/srv/aoc",
            "test",
            "1",
        ]));
        assert_eq!(config.root, Path::new("/srv/aoc"));
        assert!(!config.color);
    }

    #[test]
    fn test_relative_root_is_kept() {
        assert_eq!(expand_tilde(Path::new("puzzles")), Path::new("puzzles"));
    }

    #[test]
    fn test_tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }
}

//! Scaffolding of missing module and input files

use crate::error::ScaffoldError;
use crate::paths::PuzzlePaths;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Module skeleton written for new days
pub const MODULE_TEMPLATE: &str = include_str!("../template/day.rs");

/// What happened to one scaffolded file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileAction {
    /// The file was written
    Created(PathBuf),
    /// A file already existed and was left untouched
    AlreadyPresent(PathBuf),
    /// The caller reported the file present, nothing was attempted
    Skipped,
}

/// Result of a scaffold call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub module: FileAction,
    pub input: FileAction,
}

impl ScaffoldReport {
    /// Paths written by this call
    pub fn created(&self) -> impl Iterator<Item = &Path> {
        [&self.module, &self.input]
            .into_iter()
            .filter_map(|action| match action {
                FileAction::Created(path) => Some(path.as_path()),
                _ => None,
            })
    }
}

/// Create the module template and/or an empty input file.
///
/// Files are opened create-new, so a file that appeared after the absence
/// check is never overwritten.
pub fn scaffold(
    paths: &PuzzlePaths,
    module_absent: bool,
    input_absent: bool,
) -> Result<ScaffoldReport, ScaffoldError> {
    let module = if module_absent {
        write_new(&paths.module, MODULE_TEMPLATE.as_bytes())?
    } else {
        FileAction::Skipped
    };
    let input = if input_absent {
        write_new(&paths.input, b"")?
    } else {
        FileAction::Skipped
    };
    Ok(ScaffoldReport { module, input })
}

fn write_new(path: &Path, contents: &[u8]) -> Result<FileAction, ScaffoldError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| ScaffoldError::DirCreation {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!(path = %path.display(), "file already present, not overwriting");
            return Ok(FileAction::AlreadyPresent(path.to_path_buf()));
        }
        Err(source) => {
            return Err(ScaffoldError::Write {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    file.write_all(contents)
        .map_err(|source| ScaffoldError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), "created");
    Ok(FileAction::Created(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::PuzzleId;
    use tempfile::TempDir;

    fn paths(temp: &TempDir) -> PuzzlePaths {
        PuzzlePaths::resolve(temp.path(), PuzzleId { year: 2015, day: 4 })
    }

    #[test]
    fn test_creates_template_and_empty_input() {
        let temp = TempDir::new().unwrap();
        let paths = paths(&temp);

        let report = scaffold(&paths, true, true).unwrap();
        assert_eq!(report.module, FileAction::Created(paths.module.clone()));
        assert_eq!(report.input, FileAction::Created(paths.input.clone()));
        assert_eq!(report.created().count(), 2);

        assert_eq!(fs::read_to_string(&paths.module).unwrap(), MODULE_TEMPLATE);
        assert_eq!(fs::read_to_string(&paths.input).unwrap(), "");
    }

    #[test]
    fn test_present_sides_are_untouched() {
        let temp = TempDir::new().unwrap();
        let paths = paths(&temp);

        let report = scaffold(&paths, false, true).unwrap();
        assert_eq!(report.module, FileAction::Skipped);
        assert!(!paths.module.exists());
        assert!(paths.input.exists());
    }

    #[test]
    fn test_second_scaffold_keeps_edited_module() {
        let temp = TempDir::new().unwrap();
        let paths = paths(&temp);

        scaffold(&paths, true, true).unwrap();
        fs::write(&paths.module, "// solved").unwrap();
        fs::write(&paths.input, "input").unwrap();

        // Second call with module present
        let report = scaffold(&paths, false, false).unwrap();
        assert_eq!(report.created().count(), 0);
        assert_eq!(fs::read_to_string(&paths.module).unwrap(), "// solved");

        // Even a stale absence flag does not overwrite
        let report = scaffold(&paths, true, true).unwrap();
        assert_eq!(report.module, FileAction::AlreadyPresent(paths.module.clone()));
        assert_eq!(report.input, FileAction::AlreadyPresent(paths.input.clone()));
        assert_eq!(fs::read_to_string(&paths.module).unwrap(), "// solved");
        assert_eq!(fs::read_to_string(&paths.input).unwrap(), "input");
    }

    #[test]
    fn test_blocked_directories_are_errors() {
        let temp = TempDir::new().unwrap();
        let paths = paths(&temp);

        fs::write(temp.path().join("2015"), "").unwrap();
        assert!(matches!(
            scaffold(&paths, true, true),
            Err(ScaffoldError::DirCreation { path, .. }) if path == temp.path().join("2015")
        ));

        // Module directory fine, inputs directory blocked
        fs::remove_file(temp.path().join("2015")).unwrap();
        fs::create_dir(temp.path().join("2015")).unwrap();
        fs::write(temp.path().join("2015/inputs"), "").unwrap();
        assert!(matches!(
            scaffold(&paths, false, true),
            Err(ScaffoldError::DirCreation { path, .. }) if path == temp.path().join("2015/inputs")
        ));
    }

    #[test]
    fn test_template_exposes_module_contract() {
        assert!(MODULE_TEMPLATE.contains("pub fn part1(_input: &str)"));
        assert!(MODULE_TEMPLATE.contains("pub fn part2(_input: &str)"));
        assert!(MODULE_TEMPLATE.contains("pub fn tests() -> Vec<TestCase>"));
    }
}

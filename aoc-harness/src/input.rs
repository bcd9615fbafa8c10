//! Puzzle input loading

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read the raw input text, or `None` if the file does not exist.
///
/// The text is returned untouched; modules trim as they need.
pub fn load_input(path: &Path) -> Result<Option<String>, InputError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(InputError {
            path: path.to_path_buf(),
            source,
        }),
    }
}

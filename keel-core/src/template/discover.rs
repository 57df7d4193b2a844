use crate::error::LoadError;
use glob::glob;
use std::path::PathBuf;

/// Discovers template files matching a glob pattern.
///
/// Returns matching regular files in sorted order, so templates with the same
/// file name in one glob resolve deterministically. Unreadable entries and
/// directories are skipped.
///
/// # Errors
///
/// Returns `LoadError::Glob` if the pattern is malformed.
pub fn discover(pattern: &str) -> Result<Vec<PathBuf>, LoadError> {
    let mut paths: Vec<_> = glob(pattern)?
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .collect();

    paths.sort();
    Ok(paths)
}

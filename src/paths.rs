//! Path normalization and file name resolution

use std::fs;
use std::io;
use std::path::Path;

pub const DEFAULT_EXTENSION: &str = "json";

/// Ensure `path` ends with exactly one `/`.
///
/// Runs of trailing `/` or `\` collapse into a single `/`. An empty path
/// becomes `./`; the filesystem root stays `/`.
pub fn normalize_dir(path: &str) -> String {
    if path.is_empty() {
        return "./".to_string();
    }
    let trimmed = path.trim_end_matches(['/', '\\']);
    format!("{trimmed}/")
}

/// Add `.json` to `name` unless it already carries an extension.
pub fn resolve_file_name(name: &str) -> String {
    if Path::new(name).extension().is_some() {
        name.to_string()
    } else {
        format!("{name}.{DEFAULT_EXTENSION}")
    }
}

/// First entry of `dir` in byte order of the file name, or `None` when empty.
///
/// Hidden files and subdirectories count. Names that are not valid UTF-8 are
/// skipped.
pub fn first_entry(dir: &Path) -> io::Result<Option<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        if let Ok(name) = entry?.file_name().into_string() {
            names.push(name);
        }
    }
    names.sort_unstable();
    Ok(names.into_iter().next())
}

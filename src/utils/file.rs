//! File reading helpers for /proc and /sys sources.

use std::fs;
use std::path::Path;

/// Read the first line of a single-line pseudo-file, trimmed.
pub fn read_first_line<P: AsRef<Path>>(path: P) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    Some(contents.lines().next().unwrap_or("").trim().to_string())
}

/// Check if a path exists.
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

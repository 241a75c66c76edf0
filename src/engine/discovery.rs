//! Candidate discovery
//!
//! Lists the immediate entries of a directory and keeps the files whose name
//! ends with a literal suffix. Results are sorted by file name so runs are
//! reproducible across platforms.

use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::error::{EvalError, Result};

/// Default suffix selecting candidate files
pub const DEFAULT_EXTENSION: &str = ".wav";

/// Find the files directly inside `dir` whose name ends with `suffix`
///
/// The match is case-sensitive and non-recursive. Symlinks are followed, so a
/// link to a file counts as a file and a dangling link is an error.
/// Subdirectories are skipped even if their name matches. An empty result is
/// not an error.
pub fn discover(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(EvalError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| EvalError::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        if entry.file_name().to_string_lossy().ends_with(suffix) {
            found.push(entry.into_path());
        }
    }

    debug!(
        "Discovered {} candidate(s) ending in '{}' under {}",
        found.len(),
        suffix,
        dir.display()
    );

    Ok(found)
}

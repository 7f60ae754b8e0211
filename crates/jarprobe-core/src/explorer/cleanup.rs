//! Removal of exploded trees left behind by earlier scans.

use std::fs;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::Result;
use crate::ScanError;

/// Deletes `dir` and everything below it, deepest paths first.
///
/// Returns `Ok(false)` if there was nothing to delete. Symlinks are removed,
/// never followed.
///
/// # Errors
///
/// Returns the first walk or removal failure; entries removed before the
/// failure stay removed.
pub fn remove_exploded_tree(dir: &Path) -> Result<bool> {
    if fs::symlink_metadata(dir).is_err() {
        return Ok(false);
    }

    let mut removed = 0usize;
    for entry in WalkDir::new(dir).contents_first(true) {
        let entry = entry.map_err(|e| {
            ScanError::Io(
                e.into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("walkdir error")),
            )
        })?;

        if entry.file_type().is_dir() {
            fs::remove_dir(entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
        removed += 1;
    }

    debug!(path = %dir.display(), removed, "removed previous exploded tree");
    Ok(true)
}

//! Error conversion utilities for CLI.
//!
//! Converts jarprobe-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::Result;
use anyhow::anyhow;
use jarprobe_core::ScanError;
use std::path::Path;

/// Converts `ScanError` to user-friendly anyhow error with context
pub fn convert_scan_error(err: ScanError, archive: &Path) -> anyhow::Error {
    match err {
        ScanError::InvalidIdentifier => {
            anyhow!(
                "Dependency name is empty\n\
                 HINT: Pass an artifact name such as 'log4j-core' or coordinates such as \
                 'org.apache.logging.log4j:log4j-core'."
            )
        }
        ScanError::InvalidArchive { path, reason } => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: The root must be an existing .jar file (use --extension to accept war/ear).",
                path.display(),
                reason
            )
        }
        ScanError::ArchiveOpen { path, reason } => {
            anyhow!(
                "Cannot open archive '{}': {}\n\
                 HINT: The archive may be corrupted or not zip-based.",
                path.display(),
                reason
            )
        }
        ScanError::Io(io_err) => {
            anyhow!(
                "I/O error while processing '{}': {}",
                archive.display(),
                io_err
            )
        }
        _ => anyhow::Error::from(err)
            .context(format!("Error scanning archive '{}'", archive.display())),
    }
}

/// Adds context to a generic error about archive operations
pub fn add_archive_context<T>(result: Result<T, ScanError>, archive: &Path) -> anyhow::Result<T> {
    result.map_err(|e| convert_scan_error(e, archive))
}

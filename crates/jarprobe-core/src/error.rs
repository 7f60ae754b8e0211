//! Error types for archive exploration.

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ScanError`.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors that can occur while exploring an archive tree.
///
/// Apart from [`ScanError::InvalidIdentifier`] and a rejected root archive,
/// these errors are local: the explorer records them as [`ScanIssue`]s and
/// continues with sibling entries and archives.
#[derive(Error, Debug)]
pub enum ScanError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dependency identifier is empty after normalization.
    #[error("dependency identifier must not be empty")]
    InvalidIdentifier,

    /// Path is missing, not a regular file, or lacks an archive extension.
    #[error("invalid archive {path}: {reason}")]
    InvalidArchive {
        /// The rejected path.
        path: PathBuf,
        /// Why the path was rejected.
        reason: String,
    },

    /// Archive exists but could not be opened as a zip container.
    #[error("cannot open archive {path}: {reason}")]
    ArchiveOpen {
        /// The archive path.
        path: PathBuf,
        /// Reason reported by the archive reader.
        reason: String,
    },

    /// A single entry header could not be read.
    #[error("unreadable entry {name}: {reason}")]
    InvalidEntry {
        /// Raw entry name (or index) inside the archive.
        name: String,
        /// Reason reported by the archive reader.
        reason: String,
    },

    /// Entry name would resolve outside of the exploded tree.
    #[error("path traversal detected: {path}")]
    PathTraversal {
        /// The offending entry name.
        path: PathBuf,
    },

    /// Package descriptor is not well-formed XML.
    #[error("malformed descriptor {path}: {reason}")]
    DescriptorParse {
        /// The descriptor file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// Nested archives go deeper than the configured limit.
    #[error("nesting depth {depth} exceeds limit of {max}: {path}")]
    DepthLimitExceeded {
        /// The archive that was not explored.
        path: PathBuf,
        /// Depth at which it was found.
        depth: usize,
        /// Configured maximum.
        max: usize,
    },
}

impl ScanError {
    /// Creates an `InvalidArchive` error for `path`.
    pub fn invalid_archive(path: &Path, reason: impl Into<String>) -> Self {
        Self::InvalidArchive {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// A local failure recorded during exploration.
///
/// The scan keeps going after an issue; the list of issues is handed back to
/// the caller next to the regular results.
#[derive(Debug)]
pub struct ScanIssue {
    /// File or archive the failure relates to.
    pub location: PathBuf,
    /// What went wrong.
    pub error: ScanError,
}

impl ScanIssue {
    /// Creates a new issue.
    pub fn new(location: impl Into<PathBuf>, error: ScanError) -> Self {
        Self {
            location: location.into(),
            error,
        }
    }
}

impl std::fmt::Display for ScanIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.location.display(), self.error)
    }
}

//! Scan results and progress reporting.

use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use crate::ScanError;
use crate::descriptor::DescriptorMatch;
use crate::error::ScanIssue;

/// Results of one top-level scan.
///
/// The three result containers are append-only: the explorer adds to them
/// while walking the archive tree and nothing is ever removed.
#[derive(Debug, Default)]
pub struct ScanReport {
    matches: Vec<PathBuf>,
    matched_archives: BTreeSet<String>,
    descriptor_matches: BTreeSet<DescriptorMatch>,
    issues: Vec<ScanIssue>,

    /// Number of archives opened and walked, root included.
    pub archives_explored: usize,

    /// Number of files written to exploded trees.
    pub files_extracted: usize,

    /// Number of directory entries created.
    pub directories_created: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Number of entries neither extracted nor matched (compiled classes).
    pub entries_skipped: usize,

    /// Wall-clock duration of the scan.
    pub duration: Duration,
}

impl ScanReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a matching path found inside `archive_name`.
    pub fn add_match(&mut self, path: PathBuf, archive_name: &str) {
        self.matches.push(path);
        if !self.matched_archives.contains(archive_name) {
            self.matched_archives.insert(archive_name.to_string());
        }
    }

    /// Records a descriptor known to reference the dependency.
    ///
    /// Returns `false` if an identical line was already recorded.
    pub fn add_descriptor_match(&mut self, found: DescriptorMatch) -> bool {
        self.descriptor_matches.insert(found)
    }

    /// Records a local failure.
    pub fn add_issue(&mut self, location: impl Into<PathBuf>, error: ScanError) {
        self.issues.push(ScanIssue::new(location, error));
    }

    /// Matching paths, in discovery order.
    #[must_use]
    pub fn matches(&self) -> &[PathBuf] {
        &self.matches
    }

    /// Base names of archives with at least one match.
    #[must_use]
    pub fn matched_archives(&self) -> &BTreeSet<String> {
        &self.matched_archives
    }

    /// Descriptor files referencing the dependency.
    #[must_use]
    pub fn descriptor_matches(&self) -> &BTreeSet<DescriptorMatch> {
        &self.descriptor_matches
    }

    /// Local failures encountered during the scan.
    #[must_use]
    pub fn issues(&self) -> &[ScanIssue] {
        &self.issues
    }

    /// Returns whether the dependency was found anywhere.
    #[must_use]
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Returns whether any local failure was recorded.
    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

/// Callback trait for progress reporting during a scan.
///
/// # Examples
///
/// ```
/// use jarprobe_core::ProgressCallback;
/// use std::path::Path;
///
/// struct PrintProgress;
///
/// impl ProgressCallback for PrintProgress {
///     fn on_archive_start(&mut self, path: &Path, depth: usize) {
///         println!("{}{}", "  ".repeat(depth), path.display());
///     }
///
///     fn on_entry_complete(&mut self, _path: &Path, _bytes: u64) {}
///
///     fn on_archive_complete(&mut self, _path: &Path) {}
///
///     fn on_complete(&mut self) {
///         println!("done");
///     }
/// }
/// ```
pub trait ProgressCallback {
    /// Called when an archive is about to be walked.
    ///
    /// `depth` is 0 for the root archive.
    fn on_archive_start(&mut self, path: &Path, depth: usize);

    /// Called after an entry was handled; `bytes` is 0 for directories and
    /// skipped entries.
    fn on_entry_complete(&mut self, path: &Path, bytes: u64);

    /// Called when every entry of an archive (and its nested archives) has
    /// been handled.
    fn on_archive_complete(&mut self, path: &Path);

    /// Called once when the whole scan is complete.
    fn on_complete(&mut self);
}

/// `ProgressCallback` that ignores every event.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_archive_start(&mut self, _path: &Path, _depth: usize) {}

    fn on_entry_complete(&mut self, _path: &Path, _bytes: u64) {}

    fn on_archive_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {}
}

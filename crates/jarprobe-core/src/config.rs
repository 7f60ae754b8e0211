//! Scan configuration.

use std::ffi::OsStr;
use std::path::Path;
use std::path::PathBuf;

/// Configuration for a scan of a nested archive tree.
///
/// # Examples
///
/// ```
/// use jarprobe_core::ScanConfig;
///
/// // Plain `.jar` scanning with the default nesting limit
/// let config = ScanConfig::default();
///
/// // Also descend into web and enterprise archives
/// let custom = ScanConfig::default()
///     .with_extension("war")
///     .with_extension("ear")
///     .with_max_depth(8);
/// assert!(custom.is_archive_name("app.war"));
/// ```
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// File extensions (without the dot) treated as explorable archives.
    ///
    /// Compared case-insensitively. Default: `["jar"]`.
    pub archive_extensions: Vec<String>,

    /// Suffix appended to an archive's file name to form its exploded tree.
    ///
    /// Default: `"_exploded"`.
    pub exploded_suffix: String,

    /// Entries whose name ends with this suffix are neither extracted nor
    /// matched.
    ///
    /// Default: `".class"`.
    pub skipped_suffix: String,

    /// File name of package descriptors inspected for a version.
    ///
    /// Default: `"pom.xml"`.
    pub descriptor_file_name: String,

    /// Maximum nesting depth below the root archive.
    ///
    /// The root is depth 0. Default: 32.
    pub max_depth: usize,

    /// Directory the root archive is copied to before scanning.
    ///
    /// Default: `None` (scan in place).
    pub staging_dir: Option<PathBuf>,

    /// Delete a pre-existing exploded tree of the root archive first.
    ///
    /// Default: `true`.
    pub clean_previous: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            archive_extensions: vec!["jar".to_string()],
            exploded_suffix: "_exploded".to_string(),
            skipped_suffix: ".class".to_string(),
            descriptor_file_name: "pom.xml".to_string(),
            max_depth: 32,
            staging_dir: None,
            clean_previous: true,
        }
    }
}

impl ScanConfig {
    /// Creates a new `ScanConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an archive extension (leading dot optional).
    #[must_use]
    pub fn with_extension(mut self, extension: &str) -> Self {
        let extension = extension.trim_start_matches('.');
        if !extension.is_empty()
            && !self
                .archive_extensions
                .iter()
                .any(|ext| ext.eq_ignore_ascii_case(extension))
        {
            self.archive_extensions.push(extension.to_string());
        }
        self
    }

    /// Sets the maximum nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the staging directory.
    #[must_use]
    pub fn with_staging_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.staging_dir = dir;
        self
    }

    /// Enables or disables the pre-scan cleanup of the root exploded tree.
    #[must_use]
    pub fn with_clean_previous(mut self, clean: bool) -> Self {
        self.clean_previous = clean;
        self
    }

    /// Returns whether a file name carries one of the archive extensions.
    #[must_use]
    pub fn is_archive_name(&self, name: &str) -> bool {
        Path::new(name)
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| {
                self.archive_extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }

    /// Returns whether entries with this name are skipped.
    #[must_use]
    pub fn is_skipped_name(&self, name: &str) -> bool {
        name.ends_with(&self.skipped_suffix)
    }

    /// Returns whether this file name denotes a package descriptor.
    #[must_use]
    pub fn is_descriptor_name(&self, name: &str) -> bool {
        name.ends_with(&self.descriptor_file_name)
    }

    /// Computes `<parent>/<file-name><suffix>` for an archive path.
    #[must_use]
    pub fn exploded_dir_for(&self, archive: &Path) -> PathBuf {
        let mut name = archive.file_name().unwrap_or_default().to_os_string();
        name.push(&self.exploded_suffix);
        archive.with_file_name(name)
    }
}

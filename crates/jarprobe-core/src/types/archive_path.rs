//! Validated archive path type.

use std::path::Path;
use std::path::PathBuf;

use crate::Result;
use crate::ScanConfig;
use crate::ScanError;

/// An absolute path to an existing regular file with an archive extension.
///
/// Every archive the explorer opens, root or nested, goes through
/// [`ArchivePath::validate`] first.
///
/// # Examples
///
/// ```no_run
/// use jarprobe_core::ScanConfig;
/// use jarprobe_core::types::ArchivePath;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ScanConfig::default();
/// let archive = ArchivePath::validate("target/app.jar", &config)?;
/// println!("exploding into {}", archive.exploded_dir(&config).display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivePath(PathBuf);

impl ArchivePath {
    /// Validates `path` as an explorable archive.
    ///
    /// Relative paths are made absolute against the current directory without
    /// resolving symlinks, so reported paths keep the shape the user passed.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidArchive`] if the path does not exist, is
    /// not a regular file, or lacks an archive extension, and
    /// [`ScanError::Io`] if the current directory cannot be determined.
    pub fn validate(path: impl AsRef<Path>, config: &ScanConfig) -> Result<Self> {
        let path = path.as_ref();

        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ScanError::invalid_archive(path, "file does not exist"));
            }
            Err(e) => return Err(ScanError::Io(e)),
        };

        if !metadata.is_file() {
            return Err(ScanError::invalid_archive(path, "not a regular file"));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        if !config.is_archive_name(&name) {
            return Err(ScanError::invalid_archive(
                path,
                format!(
                    "expected one of the extensions: {}",
                    config.archive_extensions.join(", ")
                ),
            ));
        }

        Ok(Self(std::path::absolute(path)?))
    }

    /// Returns the absolute archive path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Returns the archive's base name.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.0
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Returns the directory this archive is exploded into.
    #[must_use]
    pub fn exploded_dir(&self, config: &ScanConfig) -> PathBuf {
        config.exploded_dir_for(&self.0)
    }
}

impl AsRef<Path> for ArchivePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_existing_jar() {
        let temp = TempDir::new().unwrap();
        let jar = temp.path().join("app.jar");
        fs::write(&jar, b"not inspected here").unwrap();

        let config = ScanConfig::default();
        let archive = ArchivePath::validate(&jar, &config).unwrap();
        assert!(archive.as_path().is_absolute());
        assert_eq!(archive.file_name(), "app.jar");
        assert_eq!(
            archive.exploded_dir(&config),
            temp.path().join("app.jar_exploded")
        );
    }

    #[test]
    fn test_validate_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = ArchivePath::validate(temp.path().join("gone.jar"), &ScanConfig::default());
        assert!(matches!(result, Err(ScanError::InvalidArchive { .. })));
    }

    #[test]
    fn test_validate_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("looks-like.jar");
        fs::create_dir(&dir).unwrap();

        let result = ArchivePath::validate(&dir, &ScanConfig::default());
        match result {
            Err(ScanError::InvalidArchive { reason, .. }) => {
                assert!(reason.contains("not a regular file"));
            }
            other => panic!("expected InvalidArchive, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_wrong_extension() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("app.zip");
        fs::write(&file, b"").unwrap();

        let result = ArchivePath::validate(&file, &ScanConfig::default());
        assert!(matches!(result, Err(ScanError::InvalidArchive { .. })));

        let config = ScanConfig::default().with_extension("zip");
        assert!(ArchivePath::validate(&file, &config).is_ok());
    }
}

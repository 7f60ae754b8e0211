//! Zip-based Java archive handler (`.jar`, `.war`, `.ear`).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use crate::Result;
use crate::ScanError;

use super::traits::ArchiveFormat;
use super::traits::Entry;

/// An opened Java archive.
pub struct JarArchive {
    path: PathBuf,
    inner: zip::ZipArchive<BufReader<File>>,
}

impl JarArchive {
    /// Opens the archive at `path` and reads its central directory.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::ArchiveOpen`] if the file cannot be opened or is
    /// not a valid zip container.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| ScanError::ArchiveOpen {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let inner =
            zip::ZipArchive::new(BufReader::new(file)).map_err(|e| ScanError::ArchiveOpen {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            inner,
        })
    }
}

impl std::fmt::Debug for JarArchive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JarArchive")
            .field("path", &self.path)
            .field("entries", &self.inner.len())
            .finish()
    }
}

impl ArchiveFormat for JarArchive {
    fn format_name(&self) -> &str {
        "jar"
    }

    fn entry_count(&self) -> usize {
        self.inner.len()
    }

    fn for_each_entry(&mut self, visit: &mut dyn FnMut(Result<Entry<'_>>)) {
        for index in 0..self.inner.len() {
            let mut file = match self.inner.by_index(index) {
                Ok(file) => file,
                Err(e) => {
                    visit(Err(ScanError::InvalidEntry {
                        name: format!("entry #{index}"),
                        reason: e.to_string(),
                    }));
                    continue;
                }
            };

            let Some(path) = file.enclosed_name() else {
                visit(Err(ScanError::PathTraversal {
                    path: PathBuf::from(file.name()),
                }));
                continue;
            };

            // Drops the trailing separator of directory entries
            let path: PathBuf = path.components().collect();
            let is_dir = file.is_dir();
            visit(Ok(Entry::new(path, is_dir, &mut file)));
        }
    }
}

//! Common traits for archive format handlers.

use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use crate::Result;

/// One entry of an opened archive.
///
/// The path is relative and has already been checked not to escape the
/// directory it is joined onto.
pub struct Entry<'a> {
    path: PathBuf,
    is_dir: bool,
    reader: &'a mut dyn Read,
}

impl<'a> Entry<'a> {
    /// Creates an entry over `reader`.
    pub fn new(path: PathBuf, is_dir: bool, reader: &'a mut dyn Read) -> Self {
        Self {
            path,
            is_dir,
            reader,
        }
    }

    /// Relative path of the entry inside the archive.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns whether the entry is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Byte stream of the entry (empty for directories).
    pub fn reader(&mut self) -> &mut dyn Read {
        self.reader
    }
}

impl std::fmt::Debug for Entry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("path", &self.path)
            .field("is_dir", &self.is_dir)
            .finish_non_exhaustive()
    }
}

/// Trait for archive format handlers.
///
/// An implementation is an opened, read-only handle; dropping it releases
/// the underlying file.
pub trait ArchiveFormat {
    /// Returns the archive format name.
    fn format_name(&self) -> &str;

    /// Number of entries declared by the archive.
    fn entry_count(&self) -> usize;

    /// Visits every entry once, in the order the archive stores them.
    ///
    /// An entry that cannot be read is passed to `visit` as an error and the
    /// walk continues with the next one.
    fn for_each_entry(&mut self, visit: &mut dyn FnMut(Result<Entry<'_>>));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ScanError;
    use std::io::Cursor;

    struct MemoryFormat {
        entries: Vec<(&'static str, bool, &'static [u8])>,
    }

    impl ArchiveFormat for MemoryFormat {
        fn format_name(&self) -> &str {
            "memory"
        }

        fn entry_count(&self) -> usize {
            self.entries.len()
        }

        fn for_each_entry(&mut self, visit: &mut dyn FnMut(Result<Entry<'_>>)) {
            for (name, is_dir, data) in &self.entries {
                if name.starts_with("..") {
                    visit(Err(ScanError::PathTraversal {
                        path: PathBuf::from(name),
                    }));
                    continue;
                }
                let mut cursor = Cursor::new(*data);
                visit(Ok(Entry::new(PathBuf::from(name), *is_dir, &mut cursor)));
            }
        }
    }

    #[test]
    fn test_entries_visited_in_order() {
        let mut format = MemoryFormat {
            entries: vec![
                ("META-INF/", true, b""),
                ("../escape", false, b""),
                ("META-INF/MANIFEST.MF", false, b"Manifest-Version: 1.0"),
            ],
        };
        assert_eq!(format.format_name(), "memory");
        assert_eq!(format.entry_count(), 3);

        let mut seen = Vec::new();
        let mut errors = 0;
        format.for_each_entry(&mut |entry| match entry {
            Ok(mut entry) => {
                let mut content = String::new();
                entry.reader().read_to_string(&mut content).unwrap();
                seen.push((entry.path().to_path_buf(), entry.is_dir(), content));
            }
            Err(_) => errors += 1,
        });

        assert_eq!(errors, 1);
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, PathBuf::from("META-INF/"));
        assert!(seen[0].1);
        assert_eq!(seen[1].2, "Manifest-Version: 1.0");
    }
}

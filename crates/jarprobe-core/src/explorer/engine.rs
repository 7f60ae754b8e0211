//! Core exploration engine.

use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use tracing::debug;
use tracing::warn;

use crate::DependencyId;
use crate::ProgressCallback;
use crate::Result;
use crate::ScanConfig;
use crate::ScanError;
use crate::ScanReport;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;
use crate::descriptor::DescriptorMatch;
use crate::descriptor::extract_version;
use crate::formats::ArchiveFormat;
use crate::formats::Entry;
use crate::formats::JarArchive;
use crate::matcher::path_matches;
use crate::types::ArchivePath;

/// Depth-first explorer over a tree of nested archives.
///
/// The explorer writes into a caller-owned [`ScanReport`]; it never fails as
/// a whole. Every local failure (unopenable archive, unreadable entry, write
/// error, malformed descriptor, nesting too deep) is recorded as an issue in
/// the report and the walk continues with the next entry.
///
/// # Examples
///
/// ```no_run
/// use jarprobe_core::DependencyId;
/// use jarprobe_core::Explorer;
/// use jarprobe_core::NoopProgress;
/// use jarprobe_core::ScanConfig;
/// use jarprobe_core::ScanReport;
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ScanConfig::default();
/// let dependency = DependencyId::new("log4j-core")?;
/// let mut report = ScanReport::new();
///
/// Explorer::new(&config, &dependency, &mut report, &mut NoopProgress)
///     .explore(Path::new("/srv/app.jar"));
///
/// for path in report.matches() {
///     println!("{}", path.display());
/// }
/// # Ok(())
/// # }
/// ```
pub struct Explorer<'a, P: ProgressCallback + ?Sized> {
    config: &'a ScanConfig,
    dependency: &'a DependencyId,
    report: &'a mut ScanReport,
    progress: &'a mut P,
    copy_buffer: CopyBuffer,
}

impl<'a, P: ProgressCallback + ?Sized> Explorer<'a, P> {
    /// Creates an explorer writing its findings into `report`.
    pub fn new(
        config: &'a ScanConfig,
        dependency: &'a DependencyId,
        report: &'a mut ScanReport,
        progress: &'a mut P,
    ) -> Self {
        Self {
            config,
            dependency,
            report,
            progress,
            copy_buffer: CopyBuffer::new(),
        }
    }

    /// Explores `archive_path` and, recursively, every archive inside it.
    ///
    /// The archive is extracted into `<archive>_exploded` next to it. An
    /// existing exploded tree is reused, not cleared; see
    /// [`remove_exploded_tree`](super::remove_exploded_tree). If that
    /// directory cannot be created the failure is recorded and the entries
    /// are still walked and matched.
    pub fn explore(&mut self, archive_path: &Path) {
        self.explore_at(archive_path, 0);
    }

    fn explore_at(&mut self, archive_path: &Path, depth: usize) {
        let archive = match ArchivePath::validate(archive_path, self.config) {
            Ok(archive) => archive,
            Err(e) => return self.record(archive_path, e),
        };

        if depth > self.config.max_depth {
            let error = ScanError::DepthLimitExceeded {
                path: archive.as_path().to_path_buf(),
                depth,
                max: self.config.max_depth,
            };
            return self.record(archive.as_path(), error);
        }

        // Entries are still matched when the tree cannot be created; their
        // writes then fail one by one.
        let output_dir = archive.exploded_dir(self.config);
        if let Err(e) = fs::create_dir_all(&output_dir) {
            self.record(&output_dir, e.into());
        }

        let mut handle = match JarArchive::open(archive.as_path()) {
            Ok(handle) => handle,
            Err(e) => return self.record(archive.as_path(), e),
        };

        debug!(
            archive = %archive.as_path().display(),
            format = handle.format_name(),
            entries = handle.entry_count(),
            depth,
            "exploring archive"
        );
        self.report.archives_explored += 1;
        self.progress.on_archive_start(archive.as_path(), depth);

        self.walk_entries(&mut handle, &output_dir, &archive, depth);

        self.progress.on_archive_complete(archive.as_path());
    }

    fn walk_entries(
        &mut self,
        handle: &mut dyn ArchiveFormat,
        output_dir: &Path,
        archive: &ArchivePath,
        depth: usize,
    ) {
        handle.for_each_entry(&mut |entry| match entry {
            Ok(mut entry) => self.handle_entry(&mut entry, output_dir, archive, depth),
            Err(e) => self.record(archive.as_path(), e),
        });
    }

    fn handle_entry(
        &mut self,
        entry: &mut Entry<'_>,
        output_dir: &Path,
        archive: &ArchivePath,
        depth: usize,
    ) {
        let destination = output_dir.join(entry.path());
        let name = destination
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let skipped = self.config.is_skipped_name(&name);

        let matched = !skipped && path_matches(&destination, self.dependency);
        if matched {
            debug!(path = %destination.display(), "dependency match");
            self.report
                .add_match(destination.clone(), &archive.file_name());
        }

        let mut bytes = 0;
        if entry.is_dir() {
            match fs::create_dir_all(&destination) {
                Ok(()) => self.report.directories_created += 1,
                Err(e) => self.record(&destination, e.into()),
            }
        } else if skipped {
            self.report.entries_skipped += 1;
        } else {
            match self.extract_file(entry, &destination) {
                Ok(written) => {
                    bytes = written;
                    self.report.files_extracted += 1;
                    self.report.bytes_written += written;
                }
                Err(e) => {
                    self.record(&destination, e);
                    self.progress.on_entry_complete(&destination, 0);
                    return;
                }
            }

            if matched && self.config.is_descriptor_name(&name) {
                self.inspect_descriptor(&destination);
            }
        }
        self.progress.on_entry_complete(&destination, bytes);

        if self.config.is_archive_name(&name) {
            self.explore_at(&destination, depth + 1);
        }
    }

    fn extract_file(&mut self, entry: &mut Entry<'_>, destination: &Path) -> Result<u64> {
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(destination)?);
        let written = copy_with_buffer(entry.reader(), &mut writer, &mut self.copy_buffer)?;
        writer.flush()?;
        Ok(written)
    }

    fn inspect_descriptor(&mut self, descriptor: &Path) {
        let version = match extract_version(descriptor, self.dependency) {
            Ok(version) => version,
            Err(e) => {
                self.record(descriptor, e);
                None
            }
        };

        if version.is_none() {
            debug!(path = %descriptor.display(), "descriptor declares no matching version");
        }
        self.report
            .add_descriptor_match(DescriptorMatch::new(version, descriptor));
    }

    fn record(&mut self, location: &Path, error: ScanError) {
        warn!(location = %location.display(), error = %error, "skipping after local failure");
        self.report.add_issue(location, error);
    }
}

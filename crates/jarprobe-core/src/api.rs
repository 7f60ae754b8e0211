//! High-level public API for scanning a nested archive tree.

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use tracing::info;
use tracing::warn;

use crate::DependencyId;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::ScanConfig;
use crate::ScanError;
use crate::ScanReport;
use crate::explorer::Explorer;
use crate::explorer::remove_exploded_tree;
use crate::types::ArchivePath;

/// Scans an archive tree for occurrences of `dependency`.
///
/// This is the main entry point. The root archive is validated, optionally
/// copied to `config.staging_dir`, its previous exploded tree is removed
/// (unless `config.clean_previous` is off), and then it is explored
/// recursively.
///
/// # Errors
///
/// Returns an error only if the root archive is invalid or cannot be
/// staged. Failures below the root are recorded in
/// [`ScanReport::issues`] instead.
///
/// # Examples
///
/// ```no_run
/// use jarprobe_core::DependencyId;
/// use jarprobe_core::ScanConfig;
/// use jarprobe_core::scan_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dependency = DependencyId::new("log4j-core")?;
/// let report = scan_archive("target/app.jar", &dependency, &ScanConfig::default())?;
///
/// for found in report.descriptor_matches() {
///     println!("{found}");
/// }
/// # Ok(())
/// # }
/// ```
pub fn scan_archive<P: AsRef<Path>>(
    archive_path: P,
    dependency: &DependencyId,
    config: &ScanConfig,
) -> Result<ScanReport> {
    scan_archive_with_progress(archive_path, dependency, config, &mut NoopProgress)
}

/// Scans an archive tree, reporting progress through `progress`.
///
/// # Errors
///
/// Same as [`scan_archive`].
pub fn scan_archive_with_progress<P: AsRef<Path>>(
    archive_path: P,
    dependency: &DependencyId,
    config: &ScanConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<ScanReport> {
    let start = Instant::now();
    let source = ArchivePath::validate(archive_path, config)?;

    let root = match &config.staging_dir {
        Some(staging_dir) => {
            let staged = stage_archive(source.as_path(), staging_dir)?;
            ArchivePath::validate(staged, config)?
        }
        None => source,
    };

    info!(
        archive = %root.as_path().display(),
        dependency = %dependency,
        "starting scan"
    );

    let mut report = ScanReport::new();

    if config.clean_previous {
        let exploded = root.exploded_dir(config);
        if let Err(e) = remove_exploded_tree(&exploded) {
            warn!(path = %exploded.display(), error = %e, "failed to remove previous exploded tree");
            report.add_issue(exploded, e);
        }
    }

    Explorer::new(config, dependency, &mut report, &mut *progress).explore(root.as_path());
    progress.on_complete();

    report.duration = start.elapsed();
    info!(
        matches = report.matches().len(),
        descriptors = report.descriptor_matches().len(),
        archives = report.matched_archives().len(),
        issues = report.issues().len(),
        "scan complete"
    );

    Ok(report)
}

/// Copies `archive` into `staging_dir`, overwriting a file of the same name.
///
/// The staging directory is created if needed. Returns the path of the copy;
/// if the archive already lives there, it is returned untouched.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the copy fails.
pub fn stage_archive(archive: &Path, staging_dir: &Path) -> Result<PathBuf> {
    let file_name = archive
        .file_name()
        .ok_or_else(|| ScanError::invalid_archive(archive, "path has no file name"))?;

    fs::create_dir_all(staging_dir)?;
    let destination = staging_dir.join(file_name);

    if destination.exists() && same_file(archive, &destination)? {
        return Ok(destination);
    }

    fs::copy(archive, &destination)?;
    info!(
        from = %archive.display(),
        to = %destination.display(),
        "staged archive"
    );
    Ok(destination)
}

fn same_file(a: &Path, b: &Path) -> Result<bool> {
    Ok(fs::canonicalize(a)? == fs::canonicalize(b)?)
}

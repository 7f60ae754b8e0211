//! Validated wrappers for scan inputs.
//!
//! Both types normalize or validate on construction, so the explorer never
//! has to re-check a dependency identifier or a root archive path.

pub mod archive_path;
pub mod dependency_id;

pub use archive_path::ArchivePath;
pub use dependency_id::DependencyId;

//! Locate a dependency inside nested Java archives.
//!
//! `jarprobe-core` explodes a "fat" archive (a `.jar` that bundles other
//! `.jar`s) recursively onto disk and reports where a named dependency
//! shows up: every matching path, every archive that contains a match, and
//! the version declared by each matching Maven `pom.xml`.
//!
//! # Examples
//!
//! ```no_run
//! use jarprobe_core::DependencyId;
//! use jarprobe_core::ScanConfig;
//! use jarprobe_core::scan_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dependency = DependencyId::new("commons-text")?;
//! let report = scan_archive("service.jar", &dependency, &ScanConfig::default())?;
//! println!("{} archives bundle it", report.matched_archives().len());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod copy;
pub mod descriptor;
pub mod error;
pub mod explorer;
pub mod formats;
pub mod matcher;
pub mod report;
#[doc(hidden)]
pub mod test_utils;
pub mod types;

// Re-export main API types
pub use api::scan_archive;
pub use api::scan_archive_with_progress;
pub use api::stage_archive;
pub use config::ScanConfig;
pub use descriptor::DescriptorMatch;
pub use error::Result;
pub use error::ScanError;
pub use error::ScanIssue;
pub use explorer::Explorer;
pub use report::NoopProgress;
pub use report::ProgressCallback;
pub use report::ScanReport;

pub use types::ArchivePath;
pub use types::DependencyId;

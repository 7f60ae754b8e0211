//! Lexical path matching against a dependency identifier.
//!
//! Matching is a plain substring test on the lower-cased absolute path. A
//! coincidental hit in an unrelated path segment (`my-old-library/` for
//! `old-lib`) is reported like any other match.

use std::path::Path;

use crate::DependencyId;

/// Returns `true` if `path_lowercased` contains the identifier.
///
/// The caller lower-cases the path; the identifier is already normalized.
///
/// # Examples
///
/// ```
/// use jarprobe_core::DependencyId;
/// use jarprobe_core::matcher::is_match;
///
/// # fn main() -> Result<(), jarprobe_core::ScanError> {
/// let id = DependencyId::new("Old-Lib")?;
/// assert!(is_match("/work/app.jar_exploded/lib/old-lib-1.2.jar", &id));
/// assert!(!is_match("/work/app.jar_exploded/lib/new-lib-2.0.jar", &id));
/// # Ok(())
/// # }
/// ```
#[inline]
#[must_use]
pub fn is_match(path_lowercased: &str, dependency: &DependencyId) -> bool {
    path_lowercased.contains(dependency.as_str())
}

/// Lower-cases `path` and tests it with [`is_match`].
#[must_use]
pub fn path_matches(path: &Path, dependency: &DependencyId) -> bool {
    is_match(&path.to_string_lossy().to_lowercase(), dependency)
}

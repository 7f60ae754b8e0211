//! Normalized dependency identifier.

use std::fmt;
use std::str::FromStr;

use crate::Result;
use crate::ScanError;

/// The user-supplied search key, trimmed and lower-cased once.
///
/// The identifier is either a bare name (`log4j-core`) or a Maven
/// `group:artifact` pair (`org.apache.logging.log4j:log4j-core`). It is used
/// both as a path substring and to match package descriptors.
///
/// # Examples
///
/// ```
/// use jarprobe_core::DependencyId;
///
/// # fn main() -> Result<(), jarprobe_core::ScanError> {
/// let id = DependencyId::new("  Commons-Text ")?;
/// assert_eq!(id.as_str(), "commons-text");
/// assert_eq!(id.coordinates(), None);
///
/// let id: DependencyId = "org.apache.commons:commons-text".parse()?;
/// assert_eq!(id.coordinates(), Some(("org.apache.commons", "commons-text")));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyId(String);

impl DependencyId {
    /// Normalizes `raw` into an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidIdentifier`] if nothing is left after
    /// trimming; an empty identifier would match every path.
    pub fn new(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ScanError::InvalidIdentifier);
        }
        Ok(Self(normalized))
    }

    /// Returns the normalized identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits a `group:artifact` identifier into its two halves.
    ///
    /// Returns `None` for bare names or when either half is empty.
    #[must_use]
    pub fn coordinates(&self) -> Option<(&str, &str)> {
        let (group, artifact) = self.0.split_once(':')?;
        if group.is_empty() || artifact.is_empty() {
            return None;
        }
        Some((group, artifact))
    }
}

impl FromStr for DependencyId {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for DependencyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DependencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Version extraction from Maven `pom.xml` descriptors.

use std::cmp::Ordering;
use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use roxmltree::Document;
use roxmltree::Node;
use roxmltree::ParsingOptions;

use crate::DependencyId;
use crate::Result;
use crate::ScanError;

/// Width of the right-aligned version column in formatted matches.
pub const VERSION_WIDTH: usize = 15;

/// Placeholder printed when a descriptor's version could not be resolved.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Reads `descriptor` and returns the version it declares for `dependency`.
///
/// See [`extract_version_from_str`] for the matching rules.
///
/// # Errors
///
/// Returns [`ScanError::Io`] if the file cannot be read and
/// [`ScanError::DescriptorParse`] if it is not well-formed XML.
pub fn extract_version(descriptor: &Path, dependency: &DependencyId) -> Result<Option<String>> {
    let bytes = std::fs::read(descriptor)?;
    let text = String::from_utf8_lossy(&bytes);
    extract_version_from_str(&text, dependency).map_err(|e| match e {
        ScanError::DescriptorParse { reason, .. } => ScanError::DescriptorParse {
            path: descriptor.to_path_buf(),
            reason,
        },
        other => other,
    })
}

/// Returns the version declared by an in-memory descriptor for `dependency`.
///
/// Every `project` element is inspected in document order. Its direct
/// `groupId`, `artifactId` and `version` children must all be present;
/// otherwise the element is passed over. The version of the first element is
/// returned whose lower-cased `artifactId` contains the identifier, or whose
/// `groupId:artifactId` equals the identifier exactly.
///
/// # Errors
///
/// Returns [`ScanError::DescriptorParse`] if the text is not well-formed XML.
///
/// # Examples
///
/// ```
/// use jarprobe_core::DependencyId;
/// use jarprobe_core::descriptor::extract_version_from_str;
///
/// # fn main() -> Result<(), jarprobe_core::ScanError> {
/// let pom = r"<project>
///     <groupId>org.x</groupId>
///     <artifactId>old-lib</artifactId>
///     <version>1.2</version>
/// </project>";
///
/// let by_name = extract_version_from_str(pom, &DependencyId::new("old-lib")?)?;
/// assert_eq!(by_name.as_deref(), Some("1.2"));
///
/// let by_coordinates = extract_version_from_str(pom, &DependencyId::new("org.x:old-lib")?)?;
/// assert_eq!(by_coordinates.as_deref(), Some("1.2"));
/// # Ok(())
/// # }
/// ```
pub fn extract_version_from_str(text: &str, dependency: &DependencyId) -> Result<Option<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, options).map_err(|e| {
        ScanError::DescriptorParse {
            path: PathBuf::new(),
            reason: e.to_string(),
        }
    })?;

    let found = doc
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == "project")
        .find_map(|project| project_version(project, dependency));

    Ok(found)
}

fn project_version(project: Node<'_, '_>, dependency: &DependencyId) -> Option<String> {
    let group_id = child_text(project, "groupId")?;
    let artifact_id = child_text(project, "artifactId")?;
    let version = child_text(project, "version")?;

    let by_name = artifact_id.to_lowercase().contains(dependency.as_str());
    let by_coordinates =
        dependency.coordinates() == Some((group_id.as_str(), artifact_id.as_str()));

    (by_name || by_coordinates).then_some(version)
}

/// Concatenated text of the first direct child element called `name`.
///
/// Text nested anywhere below the child counts, so comments or CDATA
/// sections around the value do not hide it. Blank text is no answer.
fn child_text(parent: Node<'_, '_>, name: &str) -> Option<String> {
    let child = parent
        .children()
        .find(|child| child.is_element() && child.tag_name().name() == name)?;

    let text: String = child
        .descendants()
        .filter(Node::is_text)
        .filter_map(|node| node.text())
        .collect();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// A descriptor file known to reference the dependency.
///
/// Matches are ordered and deduplicated by their formatted line, which is
/// how they are presented to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorMatch {
    /// Resolved version, or `None` if the descriptor did not declare one
    /// for the dependency.
    pub version: Option<String>,
    /// Absolute path of the descriptor file.
    pub path: PathBuf,
}

impl DescriptorMatch {
    /// Creates a new descriptor match.
    pub fn new(version: Option<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            version,
            path: path.into(),
        }
    }

    /// Returns the version, or [`UNKNOWN_VERSION`].
    #[must_use]
    pub fn version_or_unknown(&self) -> &str {
        self.version.as_deref().unwrap_or(UNKNOWN_VERSION)
    }
}

impl fmt::Display for DescriptorMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>width$}    {}",
            self.version_or_unknown(),
            self.path.display(),
            width = VERSION_WIDTH
        )
    }
}

impl Ord for DescriptorMatch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_string()
            .cmp(&other.to_string())
            .then_with(|| self.version.cmp(&other.version))
            .then_with(|| self.path.cmp(&other.path))
    }
}

impl PartialOrd for DescriptorMatch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

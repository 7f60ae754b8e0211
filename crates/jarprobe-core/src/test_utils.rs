//! Test utilities for building Java archives.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;
use std::path::Path;

use zip::write::SimpleFileOptions;

/// Builder for in-memory `.jar` archives.
///
/// Nested archives are added as ordinary file entries holding the bytes of
/// another built archive.
///
/// # Examples
///
/// ```
/// use jarprobe_core::test_utils::JarBuilder;
///
/// let inner = JarBuilder::new()
///     .add_file("META-INF/maven/org.x/old-lib/pom.xml", b"<project/>")
///     .build();
///
/// let outer = JarBuilder::new()
///     .add_directory("lib/")
///     .add_file("lib/old-lib-1.2.jar", &inner)
///     .build();
/// assert!(!outer.is_empty());
/// ```
pub struct JarBuilder {
    zip: zip::ZipWriter<Cursor<Vec<u8>>>,
}

impl JarBuilder {
    /// Creates a new empty archive builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zip: zip::ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Adds a stored (uncompressed) file entry.
    #[must_use]
    pub fn add_file(mut self, path: &str, data: &[u8]) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored)
            .unix_permissions(0o644);

        self.zip.start_file(path, options).unwrap();
        self.zip.write_all(data).unwrap();
        self
    }

    /// Adds a directory entry.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        let options = SimpleFileOptions::default().unix_permissions(0o755);
        self.zip.add_directory(path, options).unwrap();
        self
    }

    /// Adds a minimal Maven descriptor declaring the given coordinates.
    #[must_use]
    pub fn add_pom(self, path: &str, group_id: &str, artifact_id: &str, version: &str) -> Self {
        let pom = pom_xml(group_id, artifact_id, version);
        self.add_file(path, pom.as_bytes())
    }

    /// Builds and returns the archive bytes.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.zip.finish().unwrap().into_inner()
    }

    /// Builds the archive and writes it to `path`.
    pub fn write_to(self, path: &Path) {
        std::fs::write(path, self.build()).unwrap();
    }
}

impl Default for JarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a minimal `pom.xml` document.
#[must_use]
pub fn pom_xml(group_id: &str, artifact_id: &str, version: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>{group_id}</groupId>
  <artifactId>{artifact_id}</artifactId>
  <version>{version}</version>
</project>
"#
    )
}

/// Builds `depth` archives nested inside each other.
///
/// Level `n` (1-based, outermost first) is stored as `level{n}.jar` inside
/// level `n - 1` and contains one marker file `marker-{n}-{marker}.txt`.
/// Returns the bytes of `level1.jar`.
#[must_use]
pub fn nested_jar_chain(depth: usize, marker: &str) -> Vec<u8> {
    let mut inner: Option<Vec<u8>> = None;
    for level in (1..=depth).rev() {
        let mut builder =
            JarBuilder::new().add_file(&format!("marker-{level}-{marker}.txt"), b"marker");
        if let Some(bytes) = inner.take() {
            builder = builder.add_file(&format!("level{}.jar", level + 1), &bytes);
        }
        inner = Some(builder.build());
    }
    inner.unwrap_or_else(|| JarBuilder::new().build())
}

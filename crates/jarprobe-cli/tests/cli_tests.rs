//! Integration tests for jarprobe-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Cursor;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

fn jarprobe_cmd() -> Command {
    cargo_bin_cmd!("jarprobe")
}

fn build_jar(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (name, data) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(data).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

/// Writes `app.jar` bundling `lib/old-lib-1.2.jar` with a Maven descriptor.
fn write_fat_jar(dir: &Path) -> PathBuf {
    let pom = br#"<project>
  <groupId>org.x</groupId>
  <artifactId>old-lib</artifactId>
  <version>1.2</version>
</project>"#;
    let inner = build_jar(&[
        ("META-INF/maven/org.x/old-lib/pom.xml", pom),
        ("org/x/oldlib/Api.class", b"\xCA\xFE\xBA\xBE"),
    ]);
    let outer = build_jar(&[
        ("lib/old-lib-1.2.jar", &inner),
        ("com/acme/Main.class", b"\xCA\xFE\xBA\xBE"),
    ]);

    let jar = dir.join("app.jar");
    std::fs::write(&jar, outer).unwrap();
    jar
}

#[test]
fn test_version_flag() {
    jarprobe_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jarprobe"));
}

#[test]
fn test_help_flag() {
    jarprobe_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("DEPENDENCY"));
}

#[test]
fn test_missing_arguments_is_usage_error() {
    jarprobe_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));

    jarprobe_cmd()
        .arg("app.jar")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DEPENDENCY"));
}

#[test]
fn test_scan_prints_three_sections() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let jar = write_fat_jar(temp.path());

    jarprobe_cmd()
        .arg(&jar)
        .arg("OLD-LIB")
        .assert()
        .success()
        .stdout(predicate::str::contains("Paths matching 'old-lib'"))
        .stdout(predicate::str::contains("Descriptors declaring 'old-lib'"))
        .stdout(predicate::str::contains("Archives containing 'old-lib'"))
        .stdout(predicate::str::contains(format!(
            "{:>15}    ",
            "1.2"
        )))
        .stdout(predicate::str::contains("old-lib-1.2.jar\n"))
        .stdout(predicate::str::contains(".class").not());

    assert!(temp.path().join("app.jar_exploded/lib/old-lib-1.2.jar").is_file());
}

#[test]
fn test_scan_json_output() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let jar = write_fat_jar(temp.path());

    let output = jarprobe_cmd()
        .arg("--json")
        .arg(&jar)
        .arg("old-lib")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["status"], "success");
    assert_eq!(json["operation"], "scan");
    assert_eq!(json["data"]["dependency"], "old-lib");
    assert_eq!(json["data"]["archives"], serde_json::json!(["app.jar", "old-lib-1.2.jar"]));
    assert_eq!(json["data"]["descriptors"][0]["version"], "1.2");
    assert_eq!(json["data"]["stats"]["archives_explored"], 2);
    assert!(json["data"]["issues"].as_array().unwrap().is_empty());
}

#[test]
fn test_scan_with_staging_dir() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let source = temp.path().join("source");
    std::fs::create_dir(&source).unwrap();
    let jar = write_fat_jar(&source);
    let staging = temp.path().join("staging");

    jarprobe_cmd()
        .arg(&jar)
        .arg("old-lib")
        .arg(&staging)
        .assert()
        .success();

    assert!(staging.join("app.jar").is_file());
    assert!(staging.join("app.jar_exploded").is_dir());
    assert!(!source.join("app.jar_exploded").exists());
}

#[test]
fn test_corrupt_nested_archive_still_succeeds() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let jar = temp.path().join("app.jar");
    std::fs::write(&jar, build_jar(&[("lib/broken.jar", b"not a zip")])).unwrap();

    jarprobe_cmd()
        .arg(&jar)
        .arg("broken")
        .assert()
        .success()
        .stdout(predicate::str::contains("Archives containing 'broken'"))
        .stdout(predicate::str::contains("could not be fully explored").not())
        .stdout(predicate::str::contains("cannot open archive").not())
        .stderr(predicate::str::contains("could not be fully explored"))
        .stderr(predicate::str::contains("cannot open archive"));
}

#[test]
fn test_nonexistent_archive_fails() {
    let temp = TempDir::new().expect("failed to create temp dir");

    jarprobe_cmd()
        .arg(temp.path().join("missing.jar"))
        .arg("old-lib")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid archive"));
}

#[test]
fn test_wrong_extension_fails() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let zip = temp.path().join("app.zip");
    std::fs::write(&zip, build_jar(&[("a.txt", b"")])).unwrap();

    jarprobe_cmd()
        .arg(&zip)
        .arg("old-lib")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid archive"));
}

#[test]
fn test_empty_dependency_fails() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let jar = write_fat_jar(temp.path());

    jarprobe_cmd()
        .arg(&jar)
        .arg("   ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dependency name is empty"));
}

#[test]
fn test_json_error_output() {
    let temp = TempDir::new().expect("failed to create temp dir");

    let output = jarprobe_cmd()
        .arg("--json")
        .arg(temp.path().join("missing.jar"))
        .arg("old-lib")
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["status"], "error");
    assert!(json["error"].as_str().unwrap().contains("missing.jar"));
}

//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use jarprobe_core::DependencyId;
use jarprobe_core::ScanReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};

pub struct JsonFormatter;

#[derive(Debug, Serialize)]
struct DescriptorOutput {
    version: Option<String>,
    path: String,
}

#[derive(Debug, Serialize)]
struct IssueOutput {
    location: String,
    error: String,
}

#[derive(Debug, Serialize)]
struct StatsOutput {
    archives_explored: usize,
    files_extracted: usize,
    directories_created: usize,
    entries_skipped: usize,
    bytes_written: u64,
    duration_ms: u128,
}

#[derive(Debug, Serialize)]
struct ScanOutput {
    dependency: String,
    matches: Vec<String>,
    descriptors: Vec<DescriptorOutput>,
    archives: Vec<String>,
    issues: Vec<IssueOutput>,
    stats: StatsOutput,
}

impl ScanOutput {
    fn from_report(report: &ScanReport, dependency: &DependencyId) -> Self {
        Self {
            dependency: dependency.to_string(),
            matches: report
                .matches()
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            descriptors: report
                .descriptor_matches()
                .iter()
                .map(|d| DescriptorOutput {
                    version: d.version.clone(),
                    path: d.path.display().to_string(),
                })
                .collect(),
            archives: report.matched_archives().iter().cloned().collect(),
            issues: report
                .issues()
                .iter()
                .map(|issue| IssueOutput {
                    location: issue.location.display().to_string(),
                    error: issue.error.to_string(),
                })
                .collect(),
            stats: StatsOutput {
                archives_explored: report.archives_explored,
                files_extracted: report.files_extracted,
                directories_created: report.directories_created,
                entries_skipped: report.entries_skipped,
                bytes_written: report.bytes_written,
                duration_ms: report.duration.as_millis(),
            },
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_scan_report(&self, report: &ScanReport, dependency: &DependencyId) -> Result<()> {
        let output = JsonOutput::success("scan", ScanOutput::from_report(report, dependency));
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::error("scan", format!("{error:#}"));
        let _ = Self::output(&output);
    }
}

//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use jarprobe_core::DependencyId;
use jarprobe_core::ScanReport;

/// Horizontal rule printed under every section title.
const SEPARATOR: &str =
    "----------------------------------------------------------------------------------";

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();
        let mut count = 0;

        for c in s.chars().rev() {
            if count == 3 {
                result.push(',');
                count = 0;
            }
            result.push(c);
            count += 1;
        }

        result.chars().rev().collect()
    }

    /// Renders the three result sections as plain lines.
    ///
    /// Sections: every matching path in discovery order, the descriptor
    /// matches, then the base names of archives holding a match.
    fn section_lines(report: &ScanReport, dependency: &DependencyId) -> Vec<(String, Vec<String>)> {
        vec![
            (
                format!("Paths matching '{dependency}'"),
                report
                    .matches()
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect(),
            ),
            (
                format!("Descriptors declaring '{dependency}'"),
                report
                    .descriptor_matches()
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            ),
            (
                format!("Archives containing '{dependency}'"),
                report.matched_archives().iter().cloned().collect(),
            ),
        ]
    }

    fn write_title(&self, title: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{}", style(title).cyan().bold()));
        } else {
            let _ = self.term.write_line(title);
        }
        let _ = self.term.write_line(SEPARATOR);
    }

    fn write_summary(&self, report: &ScanReport) {
        let _ = self.term.write_line("");
        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "{} Scan complete",
                style("✓").green().bold()
            ));
        } else {
            let _ = self.term.write_line("Scan complete");
        }

        let _ = self.term.write_line(&format!(
            "  Archives explored: {}",
            Self::format_number(report.archives_explored)
        ));
        let _ = self.term.write_line(&format!(
            "  Paths matched:     {}",
            Self::format_number(report.matches().len())
        ));

        if self.verbose {
            let _ = self.term.write_line(&format!(
                "  Files extracted:   {}",
                Self::format_number(report.files_extracted)
            ));
            let _ = self.term.write_line(&format!(
                "  Directories:       {}",
                Self::format_number(report.directories_created)
            ));
            let _ = self.term.write_line(&format!(
                "  Classes skipped:   {}",
                Self::format_number(report.entries_skipped)
            ));
            let _ = self.term.write_line(&format!(
                "  Total size:        {}",
                Self::format_size(report.bytes_written)
            ));
            let _ = self
                .term
                .write_line(&format!("  Duration:          {:?}", report.duration));
        }

        if report.has_issues() {
            self.write_issues(report);
        }
    }

    /// Lists unexplored locations on stderr, away from the report itself.
    fn write_issues(&self, report: &ScanReport) {
        let term = Term::stderr();
        if self.use_colors {
            let _ = term.write_line(&format!(
                "{} {} location(s) could not be fully explored:",
                style("⚠").yellow().bold(),
                report.issues().len()
            ));
        } else {
            let _ = term.write_line(&format!(
                "WARNING: {} location(s) could not be fully explored:",
                report.issues().len()
            ));
        }
        for issue in report.issues() {
            let _ = term.write_line(&format!("  - {issue}"));
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_scan_report(&self, report: &ScanReport, dependency: &DependencyId) -> Result<()> {
        for (index, (title, lines)) in Self::section_lines(report, dependency)
            .into_iter()
            .enumerate()
        {
            if index > 0 {
                self.term.write_line("")?;
            }
            self.write_title(&title);
            for line in lines {
                self.term.write_line(&line)?;
            }
        }

        // Quiet mode still prints the results themselves
        if !self.quiet {
            self.write_summary(report);
        }

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        let term = Term::stderr();
        if self.use_colors {
            let _ = term.write_line(&format!("{} {error:#}", style("ERROR:").red().bold()));
        } else {
            let _ = term.write_line(&format!("ERROR: {error:#}"));
        }
    }
}

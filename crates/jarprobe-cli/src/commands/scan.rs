//! Scan command implementation.

use crate::cli::Cli;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use jarprobe_core::DependencyId;
use jarprobe_core::NoopProgress;
use jarprobe_core::scan_archive_with_progress;
use tracing::info;

pub fn execute(cli: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let dependency = add_archive_context(DependencyId::new(&cli.dependency), &cli.archive)?;
    let config = cli.scan_config();

    // Spinner only when a human is watching stderr
    let report = if !cli.quiet && !cli.json && CliProgress::should_show() {
        let mut progress = CliProgress::new("Scanning");
        add_archive_context(
            scan_archive_with_progress(&cli.archive, &dependency, &config, &mut progress),
            &cli.archive,
        )?
    } else {
        let mut noop = NoopProgress;
        add_archive_context(
            scan_archive_with_progress(&cli.archive, &dependency, &config, &mut noop),
            &cli.archive,
        )?
    };

    info!(
        duration_ms = report.duration.as_millis(),
        issues = report.issues().len(),
        "rendering report"
    );
    formatter.format_scan_report(&report, &dependency)?;

    Ok(())
}

//! CLI argument parsing using clap.

use clap::Parser;
use jarprobe_core::ScanConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jarprobe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the root archive (e.g. a Spring Boot fat jar)
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Dependency to look for: an artifact name or `group:artifact`
    #[arg(value_name = "DEPENDENCY")]
    pub dependency: String,

    /// Copy the archive here first and scan the copy
    #[arg(value_name = "STAGING_DIR")]
    pub staging_dir: Option<PathBuf>,

    /// Maximum archive nesting depth
    #[arg(long, default_value = "32", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_depth: u32,

    /// Additional archive extension to descend into (can be repeated)
    #[arg(long = "extension", short = 'e', value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Reuse the exploded tree from a previous run instead of deleting it
    #[arg(long)]
    pub keep_previous: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,
}

impl Cli {
    /// Builds the scan configuration from the parsed flags.
    pub fn scan_config(&self) -> ScanConfig {
        let config = self
            .extensions
            .iter()
            .fold(ScanConfig::default(), |config, ext| config.with_extension(ext));

        config
            .with_max_depth(self.max_depth as usize)
            .with_staging_dir(self.staging_dir.clone())
            .with_clean_previous(!self.keep_previous)
    }

    /// Default log level when `RUST_LOG` is unset.
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }
}

//! jarprobe - locate bundled dependencies inside fat Java archives.

mod cli;
mod commands;
mod error;
mod output;
mod progress;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_tracing(cli.log_level());

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match commands::scan::execute(&cli, &*formatter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            formatter.format_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides `default_level`.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

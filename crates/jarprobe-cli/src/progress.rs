//! Progress spinner implementation for CLI scans.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressState;
use indicatif::ProgressStyle;
use jarprobe_core::ProgressCallback;
use std::fmt::Write;
use std::path::Path;
use std::time::Duration;

/// CLI progress spinner implementing `ProgressCallback`.
///
/// The total number of entries in a nested tree is unknown up front, so a
/// spinner shows the archive being explored with its nesting depth, the
/// entry count, and the bytes written so far. Automatically cleans up on drop.
pub struct CliProgress {
    bar: ProgressBar,
    current: String,
    entries: u64,
    bytes_written: u64,
}

impl CliProgress {
    /// Creates a new CLI progress spinner.
    #[must_use]
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();

        // Template: "⠋ Scanning [2] old-lib-1.2.jar, 1204 entries (15.2 MB)"
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {prefix} {wide_msg} ({bytes})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .with_key("bytes", |state: &ProgressState, w: &mut dyn Write| {
                    write!(w, "{}", humanize_bytes(state.pos())).unwrap_or(());
                })
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
        );
        bar.set_prefix(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(120));

        Self {
            bar,
            current: String::new(),
            entries: 0,
            bytes_written: 0,
        }
    }

    /// Checks if we should show progress (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stderr().is_term()
    }

    fn refresh_message(&self) {
        self.bar
            .set_message(format!("{}, {} entries", self.current, self.entries));
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressCallback for CliProgress {
    fn on_archive_start(&mut self, path: &Path, depth: usize) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.current = format!("[{depth}] {name}");
        self.refresh_message();
    }

    fn on_entry_complete(&mut self, _path: &Path, bytes: u64) {
        self.entries += 1;
        self.bytes_written = self.bytes_written.saturating_add(bytes);
        self.bar.set_position(self.bytes_written);
        self.refresh_message();
    }

    fn on_archive_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Converts bytes to human-readable format (KB, MB, GB, TB).
fn humanize_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.1} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

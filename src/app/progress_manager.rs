//! Progress UI (spinner or log lines) for archive runs.

use std::time::Duration;

use archiver_core::{ArchiveProgress, NoProgress, RunSummary};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// How progress is shown for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProgressMode {
    /// Animated spinner on an interactive stderr.
    Spinner,
    /// One info log line per URL (non-interactive output).
    Log,
    /// Nothing (quiet mode).
    Silent,
}

impl ProgressMode {
    pub(crate) fn select(use_spinner: bool, quiet: bool) -> Self {
        if quiet {
            Self::Silent
        } else if use_spinner {
            Self::Spinner
        } else {
            Self::Log
        }
    }
}

/// Builds the progress observer for `mode`.
pub(crate) fn make_progress(mode: ProgressMode) -> Box<dyn ArchiveProgress> {
    match mode {
        ProgressMode::Spinner => Box::new(SpinnerProgress::new()),
        ProgressMode::Log => Box::new(LogProgress),
        ProgressMode::Silent => Box::new(NoProgress),
    }
}

/// Spinner showing the URL in flight and its position in the run.
pub(crate) struct SpinnerProgress {
    spinner: ProgressBar,
}

impl SpinnerProgress {
    pub(crate) fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        Self { spinner }
    }
}

impl ArchiveProgress for SpinnerProgress {
    fn start(&self, _total: usize) {
        self.spinner.set_message("Starting archiving process...");
        self.spinner.enable_steady_tick(Duration::from_millis(100));
    }

    fn attempt(&self, position: usize, total: usize, url: &str) {
        self.spinner
            .set_message(attempt_message(position, total, url));
    }

    fn finish(&self, summary: &RunSummary) {
        self.spinner.finish_with_message(format!(
            "Archiving process complete. ({}/{} archived)",
            summary.archived, summary.total
        ));
    }
}

/// Progress as log lines, for piped or redirected stderr.
struct LogProgress;

impl ArchiveProgress for LogProgress {
    fn start(&self, total: usize) {
        info!(total, "Starting archiving process");
    }

    fn attempt(&self, position: usize, total: usize, url: &str) {
        info!("{}", attempt_message(position, total, url));
    }

    fn finish(&self, _summary: &RunSummary) {}
}

pub(crate) fn attempt_message(position: usize, total: usize, url: &str) -> String {
    format!("Archiving ({position}/{total}): {url}")
}

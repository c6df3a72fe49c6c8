//! CLI output formatting helpers.

use std::path::Path;

use archiver_core::RunSummary;

/// One-line completion summary printed to stdout after the report is written.
pub(crate) fn completion_summary(summary: &RunSummary, report_path: &Path) -> String {
    format!(
        "Archived {}/{} URLs ({} failed). Report written to {}",
        summary.archived,
        summary.total,
        summary.failed,
        report_path.display()
    )
}

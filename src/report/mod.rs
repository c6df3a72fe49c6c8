//! CSV report of archive results.
//!
//! Every field is double-quoted. Embedded double quotes are doubled so URLs
//! containing `"` survive a round trip through any RFC 4180 reader.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, instrument};

use crate::archive::ArchiveResult;

/// Header row of the report.
pub const REPORT_HEADER: &str = "Original URL,Archived URL,Error";

/// Default report file name, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "output.csv";

/// Errors that can occur while writing the report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report file could not be written.
    #[error("failed to write report to {path}: {source}")]
    Io {
        /// Destination path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Renders results as CSV: header row, then one row per result in order.
///
/// Absent archived URL or error values render as `""`. Rows are joined with
/// `\n` and there is no trailing newline.
#[must_use]
pub fn render_csv(results: &[ArchiveResult]) -> String {
    let mut lines = Vec::with_capacity(results.len() + 1);
    lines.push(REPORT_HEADER.to_string());
    for result in results {
        let error = result.error().unwrap_or_default();
        lines.push(format!(
            "{},{},{}",
            quote(result.original_url()),
            quote(result.archived_url().unwrap_or_default()),
            quote(&error)
        ));
    }
    lines.join("\n")
}

/// Writes the report, replacing any existing file at `path`.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the file cannot be written.
#[instrument(level = "debug", skip(path, results), fields(path = %path.display(), rows = results.len()))]
pub fn write_report(path: &Path, results: &[ArchiveResult]) -> Result<(), ReportError> {
    let csv = render_csv(results);
    std::fs::write(path, csv).map_err(|source| ReportError::io(path, source))?;
    debug!("Report written");
    Ok(())
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

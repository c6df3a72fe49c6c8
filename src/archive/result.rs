//! Per-URL outcome records.

use super::error::ArchiveError;

/// Outcome of one save attempt: exactly one of an archived URL or an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveOutcome {
    /// The snapshot URL on the archive.
    Archived(String),
    /// The reason no snapshot URL was obtained.
    Failed(ArchiveError),
}

/// Result of archiving a single input URL.
///
/// Created once per input URL and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveResult {
    original_url: String,
    outcome: ArchiveOutcome,
}

impl ArchiveResult {
    /// Creates a successful result.
    pub fn archived(original_url: impl Into<String>, archived_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            outcome: ArchiveOutcome::Archived(archived_url.into()),
        }
    }

    /// Creates a failed result.
    pub fn failed(original_url: impl Into<String>, error: ArchiveError) -> Self {
        Self {
            original_url: original_url.into(),
            outcome: ArchiveOutcome::Failed(error),
        }
    }

    /// The URL as it appeared in the input file.
    #[must_use]
    pub fn original_url(&self) -> &str {
        &self.original_url
    }

    #[must_use]
    pub fn outcome(&self) -> &ArchiveOutcome {
        &self.outcome
    }

    /// The snapshot URL, if the attempt succeeded.
    #[must_use]
    pub fn archived_url(&self) -> Option<&str> {
        match &self.outcome {
            ArchiveOutcome::Archived(url) => Some(url),
            ArchiveOutcome::Failed(_) => None,
        }
    }

    /// The error message, if the attempt failed.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        match &self.outcome {
            ArchiveOutcome::Archived(_) => None,
            ArchiveOutcome::Failed(error) => Some(error.to_string()),
        }
    }

    #[must_use]
    pub fn is_archived(&self) -> bool {
        matches!(self.outcome, ArchiveOutcome::Archived(_))
    }
}

/// Counts over a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of results.
    pub total: usize,
    /// Results with an archived URL.
    pub archived: usize,
    /// Results with an error.
    pub failed: usize,
}

impl RunSummary {
    /// Tallies a slice of results.
    #[must_use]
    pub fn from_results(results: &[ArchiveResult]) -> Self {
        let archived = results.iter().filter(|r| r.is_archived()).count();
        Self {
            total: results.len(),
            archived,
            failed: results.len() - archived,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archived_result_has_url_and_no_error() {
        let result = ArchiveResult::archived("https://example.com", "https://web.archive.org/web/1/x");
        assert_eq!(result.original_url(), "https://example.com");
        assert_eq!(result.archived_url(), Some("https://web.archive.org/web/1/x"));
        assert!(result.error().is_none());
        assert!(result.is_archived());
    }

    #[test]
    fn test_failed_result_has_error_and_no_url() {
        let result = ArchiveResult::failed("https://example.com", ArchiveError::status(500, "Internal Server Error"));
        assert!(result.archived_url().is_none());
        assert_eq!(
            result.error().as_deref(),
            Some("Failed to archive: 500 Internal Server Error")
        );
        assert!(!result.is_archived());
    }

    #[test]
    fn test_run_summary_counts() {
        let results = vec![
            ArchiveResult::archived("a", "x"),
            ArchiveResult::failed("b", ArchiveError::transport("ECONNRESET")),
            ArchiveResult::archived("c", "y"),
        ];
        let summary = RunSummary::from_results(&results);
        assert_eq!(
            summary,
            RunSummary {
                total: 3,
                archived: 2,
                failed: 1
            }
        );
    }

    #[test]
    fn test_run_summary_empty() {
        assert_eq!(RunSummary::from_results(&[]), RunSummary::default());
    }
}

//! Sequential archive run loop.
//!
//! One URL at a time: submit, classify, record, pause, advance. Failures are
//! recorded against their URL and never stop the run, so a run over N URLs
//! always yields N results in input order.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::classify::{StatusPolicy, classify_response};
use super::client::SaveEndpoint;
use super::constants::DEFAULT_REQUEST_DELAY;
use super::result::{ArchiveResult, RunSummary};

/// Observer for run progress.
///
/// Purely observational: implementations cannot influence the run.
pub trait ArchiveProgress: Send + Sync {
    /// Called once before the first attempt.
    fn start(&self, total: usize);

    /// Called before each attempt; `position` is 1-based.
    fn attempt(&self, position: usize, total: usize, url: &str);

    /// Called once after the last result is recorded.
    fn finish(&self, summary: &RunSummary);
}

/// Progress observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ArchiveProgress for NoProgress {
    fn start(&self, _total: usize) {}

    fn attempt(&self, _position: usize, _total: usize, _url: &str) {}

    fn finish(&self, _summary: &RunSummary) {}
}

/// Context for one archive run.
///
/// Bundles the endpoint, success policy, inter-request delay and progress
/// observer. Build one per run and drop it when the run ends.
pub struct ArchiveRunner<'a> {
    endpoint: &'a dyn SaveEndpoint,
    policy: StatusPolicy,
    delay: Duration,
    progress: &'a dyn ArchiveProgress,
}

impl<'a> ArchiveRunner<'a> {
    /// Creates a runner with the default policy, the fixed 1s delay and no progress output.
    #[must_use]
    pub fn new(endpoint: &'a dyn SaveEndpoint) -> Self {
        Self {
            endpoint,
            policy: StatusPolicy::default(),
            delay: DEFAULT_REQUEST_DELAY,
            progress: &NoProgress,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: StatusPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: &'a dyn ArchiveProgress) -> Self {
        self.progress = progress;
        self
    }

    /// Overrides the pause between attempts.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Archives every URL in order and returns one result per URL.
    ///
    /// After each attempt the loop sleeps for the configured delay before
    /// starting the next one; no sleep follows the final attempt.
    pub async fn run(&self, urls: &[String]) -> Vec<ArchiveResult> {
        let total = urls.len();
        let delay_ms = u64::try_from(self.delay.as_millis()).unwrap_or(u64::MAX);
        info!(total, policy = %self.policy, delay_ms, "Starting archive run");
        self.progress.start(total);

        let mut results = Vec::with_capacity(total);
        for (index, url) in urls.iter().enumerate() {
            let position = index + 1;
            self.progress.attempt(position, total, url);

            let result = self.archive_one(url).await;
            match result.archived_url() {
                Some(archived) => {
                    debug!(position, total, url = %url, archived = %archived, "Archived");
                }
                None => warn!(
                    position,
                    total,
                    url = %url,
                    error = %result.error().unwrap_or_default(),
                    "Archive attempt failed"
                ),
            }
            results.push(result);

            if position < total {
                debug!(delay_ms, "Pausing before next request");
                tokio::time::sleep(self.delay).await;
            }
        }

        let summary = RunSummary::from_results(&results);
        info!(
            total = summary.total,
            archived = summary.archived,
            failed = summary.failed,
            "Archive run complete"
        );
        self.progress.finish(&summary);
        results
    }

    /// Performs exactly one save attempt for `url`.
    async fn archive_one(&self, url: &str) -> ArchiveResult {
        let outcome = match self.endpoint.submit(url).await {
            Ok(response) => classify_response(self.endpoint.origin(), &response, self.policy),
            Err(error) => Err(error),
        };
        match outcome {
            Ok(archived_url) => ArchiveResult::archived(url, archived_url),
            Err(error) => {
                debug!(kind = error.kind(), "Recording failed attempt");
                ArchiveResult::failed(url, error)
            }
        }
    }
}

//! HTTP client for the Wayback Machine save endpoint.
//!
//! This module provides the [`SaveEndpoint`] seam used by the run loop and
//! its production implementation, [`WaybackClient`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_LOCATION;
use reqwest::{Client, redirect};
use tracing::{debug, instrument};

use super::constants::{ARCHIVE_ORIGIN, CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS, SAVE_PATH};
use super::error::ArchiveError;
use crate::user_agent;

/// What the save endpoint answered, reduced to the signals the classifier needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveResponse {
    /// HTTP status code.
    pub status: u16,
    /// Canonical reason phrase for the status (empty when unknown).
    pub status_text: String,
    /// Value of the `content-location` header, if present and valid ASCII.
    pub content_location: Option<String>,
}

/// A service that accepts save requests for target URLs.
///
/// This trait uses `async_trait` so the run loop can hold a `&dyn SaveEndpoint`;
/// tests substitute scripted endpoints for the real client.
#[async_trait]
pub trait SaveEndpoint: Send + Sync {
    /// Origin that relative snapshot locations are resolved against.
    fn origin(&self) -> &str;

    /// Submits one save request for `target_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Transport`] when no HTTP response was received.
    async fn submit(&self, target_url: &str) -> Result<SaveResponse, ArchiveError>;
}

/// Save endpoint client backed by `reqwest`.
///
/// Created once per run and reused for every URL so the connection is pooled.
/// Redirects are never followed: a 302 from the save endpoint is itself the
/// "already archived" answer.
#[derive(Debug, Clone)]
pub struct WaybackClient {
    client: Client,
    origin: String,
}

impl WaybackClient {
    /// Creates a client for the public Wayback Machine with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns the builder error if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_origin(ARCHIVE_ORIGIN, CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS)
    }

    /// Creates a client for an explicit origin (e.g. a mock server) and timeouts.
    ///
    /// A trailing slash on `origin` is ignored.
    ///
    /// # Errors
    ///
    /// Returns the builder error if the TLS backend cannot be initialized.
    pub fn with_origin(
        origin: impl Into<String>,
        connect_timeout_secs: u64,
        read_timeout_secs: u64,
    ) -> Result<Self, reqwest::Error> {
        let origin = origin.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .timeout(Duration::from_secs(read_timeout_secs))
            .gzip(true)
            .redirect(redirect::Policy::none())
            .user_agent(user_agent::default_archive_user_agent())
            .build()?;
        Ok(Self { client, origin })
    }

    /// Builds the save URL for a target, percent-encoding the whole target.
    #[must_use]
    pub fn save_url(&self, target_url: &str) -> String {
        format!(
            "{}{SAVE_PATH}{}",
            self.origin,
            urlencoding::encode(target_url)
        )
    }
}

#[async_trait]
impl SaveEndpoint for WaybackClient {
    fn origin(&self) -> &str {
        &self.origin
    }

    #[instrument(skip(self), fields(url = %target_url))]
    async fn submit(&self, target_url: &str) -> Result<SaveResponse, ArchiveError> {
        let save_url = self.save_url(target_url);
        debug!(save_url = %save_url, "Submitting save request");

        let response = self
            .client
            .get(&save_url)
            .send()
            .await
            .map_err(|error| ArchiveError::transport(error_chain_message(&error)))?;

        let status = response.status();
        let content_location = response
            .headers()
            .get(CONTENT_LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);

        debug!(
            status = status.as_u16(),
            content_location = ?content_location,
            "Save endpoint responded"
        );

        Ok(SaveResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            content_location,
        })
    }
}

/// Flattens an error and its sources into one `a: b: c` message.
fn error_chain_message(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !cause_text.is_empty() && !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

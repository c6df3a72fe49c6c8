//! Error types for save attempts.
//!
//! Every variant here is recorded against a single URL and never aborts a run.

use thiserror::Error;

use super::constants::UNKNOWN_ERROR_MESSAGE;

/// Why a single save attempt did not produce an archived URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArchiveError {
    /// The save endpoint answered with a status that is not accepted as success.
    #[error("Failed to archive: {status} {status_text}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The canonical reason phrase for the status, empty if unknown.
        status_text: String,
    },

    /// The save endpoint answered with an accepted status but no `content-location` header.
    #[error("Failed to archive: {status} {status_text}")]
    MissingContentLocation {
        /// The HTTP status code.
        status: u16,
        /// The canonical reason phrase for the status.
        status_text: String,
    },

    /// The request itself failed (DNS, connection reset, timeout, TLS, ...).
    #[error("{message}")]
    Transport {
        /// The transport error message.
        message: String,
    },
}

impl ArchiveError {
    /// Creates a status error.
    pub fn status(status: u16, status_text: impl Into<String>) -> Self {
        Self::Status {
            status,
            status_text: status_text.into(),
        }
    }

    /// Creates a missing-header error.
    pub fn missing_content_location(status: u16, status_text: impl Into<String>) -> Self {
        Self::MissingContentLocation {
            status,
            status_text: status_text.into(),
        }
    }

    /// Creates a transport error, substituting "Unknown error" for an empty message.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        Self::Transport { message }
    }

    /// Short machine-friendly label for log fields.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Status { .. } => "status",
            Self::MissingContentLocation { .. } => "missing_content_location",
            Self::Transport { .. } => "transport",
        }
    }
}

//! Classification of save endpoint responses into outcomes.

use std::fmt;

use super::client::SaveResponse;
use super::error::ArchiveError;

/// Which save endpoint statuses count as a successful archive.
///
/// The endpoint answers 200 when it captured a fresh snapshot and 302 when a
/// recent snapshot already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Only 200 is success; 302 is recorded as an error.
    NewOnly,
    /// Both 200 and 302 are success.
    #[default]
    NewOrExisting,
}

impl StatusPolicy {
    /// Maps the `accept_existing` switch used by the CLI and config file.
    #[must_use]
    pub fn from_accept_existing(accept_existing: bool) -> Self {
        if accept_existing {
            Self::NewOrExisting
        } else {
            Self::NewOnly
        }
    }

    /// Returns true if `status` is a success status under this policy.
    #[must_use]
    pub fn accepts(self, status: u16) -> bool {
        match self {
            Self::NewOnly => status == 200,
            Self::NewOrExisting => status == 200 || status == 302,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NewOnly => "new-only",
            Self::NewOrExisting => "new-or-existing",
        }
    }
}

impl fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turns a save response into the archived snapshot URL or an error.
///
/// The snapshot URL is `origin` followed by the `content-location` value,
/// which the endpoint returns as an origin-relative path.
///
/// # Errors
///
/// - [`ArchiveError::Status`] when the status is not accepted by `policy`
/// - [`ArchiveError::MissingContentLocation`] when an accepted status has no header
pub fn classify_response(
    origin: &str,
    response: &SaveResponse,
    policy: StatusPolicy,
) -> Result<String, ArchiveError> {
    if !policy.accepts(response.status) {
        return Err(ArchiveError::status(
            response.status,
            response.status_text.clone(),
        ));
    }

    match response.content_location.as_deref() {
        Some(location) if !location.is_empty() => Ok(format!("{origin}{location}")),
        _ => Err(ArchiveError::missing_content_location(
            response.status,
            response.status_text.clone(),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://web.archive.org";
    const LOCATION: &str = "/web/20240101000000/https://example.com";

    fn response(status: u16, status_text: &str, location: Option<&str>) -> SaveResponse {
        SaveResponse {
            status,
            status_text: status_text.to_string(),
            content_location: location.map(ToString::to_string),
        }
    }

    #[test]
    fn test_200_with_location_builds_snapshot_url() {
        let archived = classify_response(
            ORIGIN,
            &response(200, "OK", Some(LOCATION)),
            StatusPolicy::NewOnly,
        )
        .unwrap();
        assert_eq!(
            archived,
            "https://web.archive.org/web/20240101000000/https://example.com"
        );
    }

    #[test]
    fn test_302_with_location_is_success_when_existing_accepted() {
        let archived = classify_response(
            ORIGIN,
            &response(302, "Found", Some(LOCATION)),
            StatusPolicy::NewOrExisting,
        )
        .unwrap();
        assert_eq!(
            archived,
            "https://web.archive.org/web/20240101000000/https://example.com"
        );
    }

    #[test]
    fn test_302_is_error_under_new_only() {
        let err = classify_response(
            ORIGIN,
            &response(302, "Found", Some(LOCATION)),
            StatusPolicy::NewOnly,
        )
        .unwrap_err();
        assert_eq!(err, ArchiveError::status(302, "Found"));
    }

    #[test]
    fn test_200_without_location_reports_status_text() {
        let err = classify_response(ORIGIN, &response(200, "OK", None), StatusPolicy::default())
            .unwrap_err();
        assert!(matches!(err, ArchiveError::MissingContentLocation { .. }));
        assert_eq!(err.to_string(), "Failed to archive: 200 OK");
    }

    #[test]
    fn test_200_with_empty_location_is_missing() {
        let err = classify_response(ORIGIN, &response(200, "OK", Some("")), StatusPolicy::default())
            .unwrap_err();
        assert!(matches!(err, ArchiveError::MissingContentLocation { .. }));
    }

    #[test]
    fn test_500_reports_status_code() {
        let err = classify_response(
            ORIGIN,
            &response(500, "Internal Server Error", Some(LOCATION)),
            StatusPolicy::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("500"), "got: {err}");
    }

    #[test]
    fn test_status_policy_display() {
        assert_eq!(StatusPolicy::NewOnly.to_string(), "new-only");
        assert_eq!(StatusPolicy::NewOrExisting.to_string(), "new-or-existing");
    }

    #[test]
    fn test_status_policy_from_accept_existing() {
        assert_eq!(StatusPolicy::from_accept_existing(true), StatusPolicy::NewOrExisting);
        assert_eq!(StatusPolicy::from_accept_existing(false), StatusPolicy::NewOnly);
    }
}

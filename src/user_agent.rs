//! User-Agent string for save endpoint requests.

/// Project URL for User-Agent identification (good citizenship; RFC 9308).
const PROJECT_UA_URL: &str = "https://github.com/et0and/alexandria";

/// Default User-Agent for save requests (identifies the tool and its version).
#[must_use]
pub(crate) fn default_archive_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("wayback-archiver/{version} (+{PROJECT_UA_URL})")
}

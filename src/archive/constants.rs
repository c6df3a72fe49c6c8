//! Constants for the archive module (endpoint, timeouts, pacing).

use std::time::Duration;

/// Origin of the Wayback Machine; the save endpoint and snapshot links live under it.
pub const ARCHIVE_ORIGIN: &str = "https://web.archive.org";

/// Path prefix of the save endpoint.
pub const SAVE_PATH: &str = "/save/";

/// Default HTTP connect timeout (30 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default total request timeout (5 minutes; captures can be slow).
pub const READ_TIMEOUT_SECS: u64 = 300;

/// Fixed pause after each save attempt before the next one starts.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(1000);

/// Message recorded when a transport error carries no text.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

//! Submitting URLs to the Wayback Machine save endpoint.
//!
//! # Features
//!
//! - One `GET /save/{encoded-url}` per target, identified by a tool User-Agent
//! - Success when the endpoint answers 200 (or 302, per [`StatusPolicy`]) with a
//!   `content-location` header pointing at the snapshot
//! - Per-URL error capture: HTTP and transport failures become results, not aborts
//! - Fixed one-second pause between requests
//!
//! # Example
//!
//! ```no_run
//! use archiver_core::archive::{ArchiveRunner, WaybackClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = WaybackClient::new()?;
//! let urls = vec!["https://example.com".to_string()];
//! for result in ArchiveRunner::new(&client).run(&urls).await {
//!     println!("{} -> {:?}", result.original_url(), result.archived_url());
//! }
//! # Ok(())
//! # }
//! ```

mod classify;
mod client;
mod constants;
mod error;
mod result;
mod runner;

pub use classify::{StatusPolicy, classify_response};
pub use client::{SaveEndpoint, SaveResponse, WaybackClient};
pub use constants::{
    ARCHIVE_ORIGIN, CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_DELAY, READ_TIMEOUT_SECS,
    UNKNOWN_ERROR_MESSAGE,
};
pub use error::ArchiveError;
pub use result::{ArchiveOutcome, ArchiveResult, RunSummary};
pub use runner::{ArchiveProgress, ArchiveRunner, NoProgress};

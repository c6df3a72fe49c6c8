//! Wayback Archiver Core Library
//!
//! This library provides the core functionality for the wayback-archiver
//! tool, which submits a list of URLs to the Wayback Machine save endpoint
//! and records where each snapshot landed.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`input`] - Loading the newline-delimited URL list
//! - [`archive`] - Save endpoint client, response classification, and the sequential run loop
//! - [`report`] - CSV rendering of per-URL results

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod archive;
pub mod input;
pub mod report;
mod user_agent;

// Re-export commonly used types
pub use archive::{
    ARCHIVE_ORIGIN, ArchiveError, ArchiveOutcome, ArchiveProgress, ArchiveResult, ArchiveRunner,
    DEFAULT_REQUEST_DELAY, NoProgress, RunSummary, SaveEndpoint, SaveResponse, StatusPolicy,
    WaybackClient, classify_response,
};
pub use input::{InputError, load_urls, parse_url_list};
pub use report::{REPORT_HEADER, ReportError, render_csv, write_report};

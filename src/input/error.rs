//! Error types for loading the URL list.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the input file.
///
/// All variants are fatal to a run: nothing is submitted and no report is
/// written when input loading fails.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file does not exist.
    #[error(
        "input file not found: {path}\n  Suggestion: create it with one URL per line, e.g. echo 'https://example.com' > {path}"
    )]
    Missing {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The input file exists but contains no usable URLs.
    #[error("No URLs found in {path}")]
    Empty {
        /// The input file path.
        path: PathBuf,
    },

    /// The input file exists but could not be read as UTF-8 text.
    #[error("failed to read input file {path}: {source}")]
    Read {
        /// The input file path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl InputError {
    /// Creates a missing-file error.
    pub fn missing(path: impl Into<PathBuf>) -> Self {
        Self::Missing { path: path.into() }
    }

    /// Creates an empty-input error.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self::Empty { path: path.into() }
    }

    /// Creates a read error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}

//! Input loading for the URL list.
//!
//! The input file is plain UTF-8 text with one URL per line. Lines are
//! trimmed and blank lines are dropped; order is preserved. No URL
//! validation happens here: whatever the user lists is submitted as-is and
//! any problem surfaces as a per-URL error from the save endpoint.

mod error;

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, instrument};

pub use error::InputError;

/// Default input file name, relative to the working directory.
pub const DEFAULT_INPUT_FILE: &str = "input.txt";

/// Splits text into trimmed, non-empty lines in their original order.
///
/// Both `\n` and `\r\n` line endings are accepted.
#[must_use]
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Reads the input file and returns its URLs.
///
/// # Errors
///
/// - [`InputError::Missing`] if the file does not exist
/// - [`InputError::Read`] if the file cannot be read as UTF-8 text
/// - [`InputError::Empty`] if the file yields no URLs after filtering
#[instrument(level = "debug", skip(path), fields(path = %path.display()))]
pub fn load_urls(path: &Path) -> Result<Vec<String>, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            InputError::missing(path)
        } else {
            InputError::read(path, source)
        }
    })?;

    let urls = parse_url_list(&text);
    if urls.is_empty() {
        return Err(InputError::empty(path));
    }

    debug!(count = urls.len(), "Loaded URLs from input file");
    Ok(urls)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_url_list_trims_and_drops_blank_lines() {
        let urls = parse_url_list("  https://a.example  \n\n\t\nhttps://b.example\n   \n");
        assert_eq!(urls, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_parse_url_list_handles_crlf() {
        let urls = parse_url_list("https://a.example\r\nhttps://b.example\r\n");
        assert_eq!(urls, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_parse_url_list_preserves_order_and_duplicates() {
        let urls = parse_url_list("c\na\nc\nb");
        assert_eq!(urls, vec!["c", "a", "c", "b"]);
    }

    #[test]
    fn test_parse_url_list_empty_text() {
        assert!(parse_url_list("").is_empty());
        assert!(parse_url_list("\n  \n\r\n").is_empty());
    }

    #[test]
    fn test_load_urls_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        let err = load_urls(&path).unwrap_err();
        assert!(matches!(err, InputError::Missing { .. }), "got: {err:?}");
    }

    #[test]
    fn test_load_urls_blank_only_file_is_empty_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "\n   \n\t\n").unwrap();
        let err = load_urls(&path).unwrap_err();
        assert!(matches!(err, InputError::Empty { .. }), "got: {err:?}");
    }

    #[test]
    fn test_load_urls_invalid_utf8_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();
        let err = load_urls(&path).unwrap_err();
        assert!(matches!(err, InputError::Read { .. }), "got: {err:?}");
    }

    #[test]
    fn test_load_urls_returns_urls_in_file_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "https://one.example\n\nhttps://two.example\n").unwrap();
        let urls = load_urls(&path).unwrap();
        assert_eq!(urls, vec!["https://one.example", "https://two.example"]);
    }
}

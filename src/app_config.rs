//! Application configuration loading for CLI defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use url::Url;

/// TOML-style file configuration for archiver defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    /// Default input file.
    pub input_file: Option<PathBuf>,
    /// Default report file.
    pub output_file: Option<PathBuf>,
    /// Treat 302 "already archived" answers as success.
    pub accept_existing: Option<bool>,
    /// Archive origin override.
    pub archive_origin: Option<String>,
    /// HTTP connect timeout in seconds.
    pub connect_timeout_secs: Option<u64>,
    /// Total request timeout in seconds.
    pub read_timeout_secs: Option<u64>,
    /// Default verbosity mode.
    pub verbosity: Option<VerbositySetting>,
}

impl FileConfig {
    /// Validates config values against runtime constraints.
    pub fn validate(&self) -> Result<()> {
        validate_timeout_secs("connect_timeout_secs", self.connect_timeout_secs)?;
        validate_timeout_secs("read_timeout_secs", self.read_timeout_secs)?;
        if let Some(origin) = self.archive_origin.as_deref() {
            validate_origin(origin)
                .with_context(|| format!("Invalid config value for `archive_origin`: {origin}"))?;
        }
        Ok(())
    }
}

fn validate_timeout_secs(field: &str, value: Option<u64>) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };
    if !(1..=3600).contains(&value) {
        bail!("Invalid config value for `{field}`: {value}. Expected range: 1..=3600");
    }
    Ok(())
}

/// Checks that `origin` is an absolute http(s) URL.
pub fn validate_origin(origin: &str) -> Result<()> {
    let parsed = Url::parse(origin).context("Expected an absolute URL")?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("Expected an http or https URL, got scheme '{}'", parsed.scheme());
    }
    if parsed.host_str().is_none() {
        bail!("Expected a URL with a host");
    }
    Ok(())
}

/// Supported config verbosity labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbositySetting {
    Default,
    Verbose,
    Quiet,
    Debug,
}

/// Resolves default config path.
///
/// Priority:
/// 1. `$XDG_CONFIG_HOME/wayback-archiver/config.toml`
/// 2. `$HOME/.config/wayback-archiver/config.toml`
#[must_use]
pub fn resolve_default_config_path() -> Option<PathBuf> {
    if let Some(xdg_config_home) = env_var_non_empty_os("XDG_CONFIG_HOME") {
        return Some(
            PathBuf::from(xdg_config_home)
                .join("wayback-archiver")
                .join("config.toml"),
        );
    }

    let home = env_var_non_empty_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("wayback-archiver")
            .join("config.toml"),
    )
}

fn env_var_non_empty_os(name: &str) -> Option<std::ffi::OsString> {
    let value = env::var_os(name)?;
    if value.is_empty() { None } else { Some(value) }
}

/// Loads config from the default path if present.
pub fn load_default_file_config() -> Result<Option<FileConfig>> {
    let Some(path) = resolve_default_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    load_file_config(&path).map(Some)
}

fn load_file_config(path: &Path) -> Result<FileConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    parse_config_str(&raw)
        .with_context(|| format!("Failed to parse config file '{}'", path.display()))
}

fn parse_config_str(raw: &str) -> Result<FileConfig> {
    let mut cfg = FileConfig::default();
    for (line_index, raw_line) in raw.lines().enumerate() {
        let line_number = line_index + 1;
        let line = strip_inline_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        let Some((raw_key, raw_value)) = line.split_once('=') else {
            bail!("Invalid config syntax on line {line_number}: expected key = value");
        };

        let key = raw_key.trim();
        let value = raw_value.trim();
        let invalid = || format!("Invalid `{key}` value on line {line_number}");

        match key {
            "input_file" => {
                cfg.input_file = Some(PathBuf::from(
                    parse_string_literal(value).with_context(invalid)?,
                ));
            }
            "output_file" => {
                cfg.output_file = Some(PathBuf::from(
                    parse_string_literal(value).with_context(invalid)?,
                ));
            }
            "accept_existing" => {
                cfg.accept_existing = Some(parse_boolean(value).with_context(invalid)?);
            }
            "archive_origin" => {
                cfg.archive_origin = Some(parse_string_literal(value).with_context(invalid)?);
            }
            "connect_timeout_secs" => {
                cfg.connect_timeout_secs = Some(parse_integer_u64(value).with_context(invalid)?);
            }
            "read_timeout_secs" => {
                cfg.read_timeout_secs = Some(parse_integer_u64(value).with_context(invalid)?);
            }
            "verbosity" => {
                let parsed = parse_string_literal(value).with_context(invalid)?;
                cfg.verbosity = Some(parse_verbosity(&parsed).with_context(|| {
                    format!("Invalid `verbosity` value '{parsed}' on line {line_number}")
                })?);
            }
            unknown => {
                bail!("Unknown configuration key: '{unknown}' on line {line_number}");
            }
        }
    }
    cfg.validate()?;
    Ok(cfg)
}

fn strip_inline_comment(line: &str) -> &str {
    let mut in_string = false;
    for (index, ch) in line.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..index],
            _ => {}
        }
    }
    line
}

fn parse_string_literal(raw_value: &str) -> Result<String> {
    if raw_value.len() < 2 || !raw_value.starts_with('"') || !raw_value.ends_with('"') {
        bail!("Expected double-quoted string");
    }
    Ok(raw_value[1..raw_value.len() - 1].to_string())
}

fn parse_integer_u64(raw_value: &str) -> Result<u64> {
    let token = raw_value.trim();
    if token.is_empty() {
        bail!("Expected integer value");
    }
    let value = token.parse::<i128>()?;
    if value < 0 {
        bail!("Expected non-negative integer");
    }
    u64::try_from(value).map_err(|_| anyhow::anyhow!("Integer value out of range for u64"))
}

fn parse_verbosity(value: &str) -> Result<VerbositySetting> {
    match value {
        "default" => Ok(VerbositySetting::Default),
        "verbose" => Ok(VerbositySetting::Verbose),
        "quiet" => Ok(VerbositySetting::Quiet),
        "debug" => Ok(VerbositySetting::Debug),
        _ => bail!("Expected one of: default, verbose, quiet, debug"),
    }
}

fn parse_boolean(raw_value: &str) -> Result<bool> {
    match raw_value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => bail!("Expected 'true' or 'false'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_config_all_fields() {
        let cfg = parse_config_str(
            r#"
# archiver defaults
input_file = "lists/urls.txt"
output_file = "reports/out.csv"   # trailing comment
accept_existing = false
archive_origin = "http://127.0.0.1:8080"
connect_timeout_secs = 10
read_timeout_secs = 120
verbosity = "verbose"
"#,
        )
        .expect("full config should parse");
        assert_eq!(cfg.input_file, Some(PathBuf::from("lists/urls.txt")));
        assert_eq!(cfg.output_file, Some(PathBuf::from("reports/out.csv")));
        assert_eq!(cfg.accept_existing, Some(false));
        assert_eq!(cfg.archive_origin.as_deref(), Some("http://127.0.0.1:8080"));
        assert_eq!(cfg.connect_timeout_secs, Some(10));
        assert_eq!(cfg.read_timeout_secs, Some(120));
        assert_eq!(cfg.verbosity, Some(VerbositySetting::Verbose));
    }

    #[test]
    fn test_parse_config_empty_is_default() {
        let cfg = parse_config_str("\n# only comments\n").expect("empty config should parse");
        assert_eq!(cfg, FileConfig::default());
    }

    #[test]
    fn test_parse_config_hash_inside_string_is_kept() {
        let cfg = parse_config_str(r#"output_file = "reports/#1.csv""#).unwrap();
        assert_eq!(cfg.output_file, Some(PathBuf::from("reports/#1.csv")));
    }

    #[test]
    fn test_parse_config_rejects_unknown_key() {
        let err = parse_config_str("rate_limit = 500").expect_err("unknown key expected");
        assert!(err.to_string().contains("rate_limit"), "got: {err}");
    }

    #[test]
    fn test_parse_config_rejects_missing_equals() {
        let err = parse_config_str("accept_existing").expect_err("syntax error expected");
        assert!(err.to_string().contains("line 1"), "got: {err}");
    }

    #[test]
    fn test_parse_config_rejects_unquoted_string() {
        let err = parse_config_str("input_file = urls.txt").expect_err("quote error expected");
        assert!(err.to_string().contains("input_file"), "got: {err}");
    }

    #[test]
    fn test_parse_config_rejects_out_of_range_timeout() {
        let err = parse_config_str("read_timeout_secs = 0").expect_err("range error expected");
        assert!(err.to_string().contains("read_timeout_secs"), "got: {err}");
    }

    #[test]
    fn test_parse_config_rejects_negative_timeout() {
        assert!(parse_config_str("connect_timeout_secs = -5").is_err());
    }

    #[test]
    fn test_parse_config_rejects_non_http_origin() {
        let err = parse_config_str(r#"archive_origin = "ftp://archive.example""#)
            .expect_err("scheme error expected");
        assert!(err.to_string().contains("archive_origin"), "got: {err}");
    }

    #[test]
    fn test_parse_config_rejects_bad_verbosity() {
        let err = parse_config_str(r#"verbosity = "loud""#).expect_err("verbosity error expected");
        assert!(err.to_string().contains("loud"), "got: {err}");
    }

    #[test]
    fn test_validate_origin_accepts_http_and_https() {
        assert!(validate_origin("https://web.archive.org").is_ok());
        assert!(validate_origin("http://127.0.0.1:1234").is_ok());
        assert!(validate_origin("not a url").is_err());
    }

    #[test]
    fn test_load_file_config_reports_path_on_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "bogus = 1\n").unwrap();
        let err = load_file_config(&path).expect_err("parse error expected");
        assert!(format!("{err:#}").contains("config.toml"), "got: {err:#}");
    }
}

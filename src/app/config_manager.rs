//! Configuration lifecycle: load file config, merge CLI, resolve run settings.

use std::path::PathBuf;

use anyhow::{Context, Result};
use archiver_core::StatusPolicy;
use archiver_core::archive::{ARCHIVE_ORIGIN, CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};
use archiver_core::input::DEFAULT_INPUT_FILE;
use archiver_core::report::DEFAULT_OUTPUT_FILE;

use crate::app_config::{self, FileConfig, VerbositySetting};
use crate::cli::Args;

/// Settings for one run after CLI flags are layered over the config file.
///
/// Precedence for every value: CLI flag > config file > built-in default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedConfig {
    pub(crate) input_path: PathBuf,
    pub(crate) output_path: PathBuf,
    pub(crate) policy: StatusPolicy,
    pub(crate) archive_origin: String,
    pub(crate) connect_timeout_secs: u64,
    pub(crate) read_timeout_secs: u64,
    pub(crate) quiet: bool,
    pub(crate) log_level: &'static str,
}

/// Loads the default config file (if any) and merges the CLI over it.
pub(crate) fn resolve_config(args: &Args) -> Result<ResolvedConfig> {
    let file_config = app_config::load_default_file_config()?;
    resolve_with_file(args, file_config.as_ref())
}

/// Merges CLI arguments over an optional file config.
pub(crate) fn resolve_with_file(
    args: &Args,
    file_config: Option<&FileConfig>,
) -> Result<ResolvedConfig> {
    let file = file_config.cloned().unwrap_or_default();

    if let Some(origin) = args.archive_origin.as_deref() {
        app_config::validate_origin(origin)
            .with_context(|| format!("Invalid --archive-origin value: {origin}"))?;
    }

    let verbosity = file.verbosity.unwrap_or(VerbositySetting::Default);
    let quiet = args.quiet || (args.verbose == 0 && verbosity == VerbositySetting::Quiet);

    Ok(ResolvedConfig {
        input_path: args
            .input
            .clone()
            .or(file.input_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILE)),
        output_path: args
            .output
            .clone()
            .or(file.output_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
        policy: StatusPolicy::from_accept_existing(
            args.accept_existing
                .or(file.accept_existing)
                .unwrap_or(true),
        ),
        archive_origin: args
            .archive_origin
            .clone()
            .or(file.archive_origin)
            .unwrap_or_else(|| ARCHIVE_ORIGIN.to_string()),
        connect_timeout_secs: file.connect_timeout_secs.unwrap_or(CONNECT_TIMEOUT_SECS),
        read_timeout_secs: file.read_timeout_secs.unwrap_or(READ_TIMEOUT_SECS),
        quiet,
        log_level: resolve_default_log_level(args, verbosity),
    })
}

/// Priority: quiet flag > verbose flag > config verbosity > default (info).
fn resolve_default_log_level(args: &Args, verbosity: VerbositySetting) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => match verbosity {
            VerbositySetting::Default => "info",
            VerbositySetting::Verbose => "debug",
            VerbositySetting::Quiet => "error",
            VerbositySetting::Debug => "trace",
        },
        1 => "debug",
        _ => "trace",
    }
}

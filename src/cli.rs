//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Batch submit URLs to the Wayback Machine and report archived snapshots.
///
/// Reads one URL per line from the input file, asks the Wayback Machine to
/// save each one (one request per second), and writes a CSV report of the
/// snapshot URLs and errors.
#[derive(Parser, Debug, Clone)]
#[command(name = "wayback-archiver")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// File with one URL per line [default: input.txt]
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// CSV report destination, overwritten on each run [default: output.csv]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Treat 302 "already archived" answers as success [default: true]
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub accept_existing: Option<bool>,

    /// Disable colored log output
    #[arg(long)]
    pub no_color: bool,

    /// Override the archive origin (for testing against a local server)
    #[arg(long, value_name = "URL", hide = true)]
    pub archive_origin: Option<String>,
}

//! CLI entry point for the wayback-archiver tool.

use std::process::ExitCode;

mod app;
mod app_config;
mod cli;

/// Process exit status for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProcessExit {
    /// Run completed (including "no URLs found").
    Success,
    /// Fatal error: missing input, bad configuration, report write failure, or interrupt.
    Failure,
}

impl From<ProcessExit> for ExitCode {
    fn from(exit: ProcessExit) -> Self {
        match exit {
            ProcessExit::Success => ExitCode::SUCCESS,
            ProcessExit::Failure => ExitCode::from(1),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match app::runtime::run_archiver().await {
        Ok(exit) => exit.into(),
        Err(error) => {
            eprintln!("Error: {error:#}");
            ProcessExit::Failure.into()
        }
    }
}

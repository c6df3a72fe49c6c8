use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use archiver_core::{ArchiveRunner, RunSummary, WaybackClient, load_urls, write_report};
use clap::Parser;
use tracing::{debug, info, warn};

use crate::ProcessExit;
use crate::app::progress_manager::{self, ProgressMode};
use crate::app::{config_manager, exit_handler, output, terminal};
use crate::cli::Args;

pub(crate) async fn run_archiver() -> Result<ProcessExit> {
    let args = Args::parse();
    let resolved = config_manager::resolve_config(&args)?;

    let no_color = terminal::is_no_color_requested(args.no_color);
    terminal::init_tracing(resolved.log_level, no_color);

    debug!(?args, ?resolved, "Configuration resolved");
    info!("Wayback archiver starting");

    let urls = match load_urls(&resolved.input_path) {
        Ok(urls) => urls,
        Err(error) => {
            eprintln!("{error}");
            return Ok(exit_handler::exit_for_input_error(&error));
        }
    };
    info!(count = urls.len(), input = %resolved.input_path.display(), "Loaded URLs");

    let client = WaybackClient::with_origin(
        resolved.archive_origin.clone(),
        resolved.connect_timeout_secs,
        resolved.read_timeout_secs,
    )
    .context("Failed to build HTTP client")?;

    let use_spinner = terminal::should_use_spinner(
        io::stderr().is_terminal(),
        resolved.quiet,
        terminal::is_dumb_terminal(),
    );
    let progress = progress_manager::make_progress(ProgressMode::select(use_spinner, resolved.quiet));
    let runner = ArchiveRunner::new(&client)
        .with_policy(resolved.policy)
        .with_progress(progress.as_ref());

    // Interrupting drops the in-flight run; nothing is written.
    let results = tokio::select! {
        results = runner.run(&urls) => results,
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted. No report was written.");
            return Ok(ProcessExit::Failure);
        }
    };

    write_report(&resolved.output_path, &results)?;
    let summary = RunSummary::from_results(&results);
    info!(
        archived = summary.archived,
        failed = summary.failed,
        output = %resolved.output_path.display(),
        "Report written"
    );

    if !resolved.quiet {
        println!("{}", output::completion_summary(&summary, &resolved.output_path));
    }

    Ok(ProcessExit::Success)
}

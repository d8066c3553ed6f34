//! Font Subsetter - Main Entry Point
//! Subsets a variable web font to the glyphs in a text file via pyftsubset

mod config;
mod logging;
mod report;

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

use config::Cli;
use fontsubset_core::application::SubsetService;
use fontsubset_infra_system::{LocalFileSystem, SubprocessToolRunner};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging()?;

    info!(version = fontsubset_core::VERSION, "Font Subsetter starting");

    let job = cli.job();
    let service = SubsetService::new(
        cli.tool.clone(),
        Arc::new(SubprocessToolRunner::new()),
        Arc::new(LocalFileSystem),
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::banner(&mut out)?;

    let result = match service.prepare(&job) {
        Ok(()) => {
            report::job_started(&mut out, &job)?;
            out.flush()?;
            service.execute(&job).await
        }
        Err(e) => Err(e),
    };

    report::outcome(&mut out, &result)?;
    report::finished(&mut out, result.is_ok())?;
    out.flush()?;

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

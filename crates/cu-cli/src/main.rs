use clap::Parser;

use cu_cli::cli::Args;
use cu_cli::{logging, render};
use cu_core::services::{config_loader, DockerRuntime, Orchestrator};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // clap prints usage and exits with status 2 on anything but the simulate flag
    let args = Args::parse();
    let guard = logging::init();

    let config = config_loader::resolve()?;
    let orchestrator = Orchestrator::new(DockerRuntime::new(), config, args.run_mode())?;
    let report = orchestrator.run().await?;

    // Flush pending log lines so the table prints after them.
    drop(guard);
    if !report.is_empty() {
        println!("{}", render::render_report(&report));
    }

    Ok(())
}

use anyhow::Context;
use clap::Parser;

use summarist::cli::{build_controller, run_once, Cli};
use summarist::logging::init_tracing;
use summarist::ui::runtime;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = cli.load_config()?;
    let base_dir = std::env::current_dir().context("Failed to resolve working directory")?;
    let mut controller = build_controller(&config, &cli)?;

    if !cli.is_one_shot() {
        cli.apply_selection(&mut controller);
        runtime::run(controller, &base_dir).await;
        return Ok(());
    }

    if let Err(err) = run_once(&mut controller, &cli, &base_dir).await {
        tracing::error!(error = %err, "One-shot summarization failed");
        // The controller has already shown a notice for its own failures.
        if err.downcast_ref::<summarist::submit::SubmitError>().is_none()
            && err.downcast_ref::<summarist::export::ExportError>().is_none()
        {
            eprintln!("Error: {:#}", err);
        }
        std::process::exit(1);
    }
    Ok(())
}

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::{info, warn};
use wl_app::usecases::PageStatus;
use worklog::bootstrap::{self, AppDirs, Settings};
use worklog::cli::{Cli, Commands};
use worklog::shell::{self, TerminalView};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let app_dirs = AppDirs::new();
    let config = bootstrap::resolve_config(cli.config.clone(), &app_dirs)?;
    let settings = Settings::resolve(config, app_dirs.app_data_root()?);

    if let Err(err) = bootstrap::tracing::init_tracing_subscriber(&settings.logs_dir()) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    runtime.block_on(run(cli.command, settings))
}

async fn run(command: Commands, settings: Settings) -> anyhow::Result<()> {
    match command {
        Commands::Onboard { link } => onboard(&link, &settings).await,
    }
}

async fn onboard(link: &str, settings: &Settings) -> anyhow::Result<()> {
    let context = shell::parse_invitation_link(link)?;
    let view = Arc::new(TerminalView::stdout(context.email()));
    let page = bootstrap::wire_onboarding_page(settings, context, view)?;

    match page.load_session.execute().await {
        Ok(Some(_)) => println!("Sessione esistente trovata: verrà sostituita al termine."),
        Ok(None) => {}
        Err(err) => warn!(error = %err, "could not read stored session"),
    }

    let status = shell::run_onboarding(&page.controller, BufReader::new(tokio::io::stdin()))
        .await
        .context("Onboarding failed")?;
    info!(?status, "onboarding page closed");

    if matches!(status, PageStatus::Blocked | PageStatus::Completed) {
        if let Some(route) = page.history.current().await {
            println!("-> {route}");
        }
    }
    Ok(())
}

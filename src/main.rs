use std::io;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;

use newsreel::cli::Cli;
use newsreel::config::{Config, CredentialStatus};
use newsreel::news::NewsClient;
use newsreel::ui::app::App;
use newsreel::ui::feed::NewsStore;
use newsreel::{headless, logging, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    if let Some(mode) = cli.mode {
        config.feed.mode = mode;
    }

    if cli.print {
        logging::init_stderr_logging();
    } else {
        let log_path = Config::log_path();
        logging::init_file_logging(&log_path)
            .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;
    }

    let api_key = match config.api.resolve_api_key() {
        CredentialStatus::Configured(key) => key,
        CredentialStatus::Unconfigured { reason } => {
            bail!("No news API key configured: {}", reason)
        }
    };
    let client = NewsClient::new(&config.api, api_key)?;
    let initial = App::initial_state(config.feed.mode, cli.query.as_deref(), cli.page);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    if cli.print {
        let mut store = NewsStore::new(initial);
        let mut stdout = io::stdout().lock();
        return runtime.block_on(headless::print_page(
            &mut store,
            &client,
            &config.feed,
            &mut stdout,
        ));
    }

    tracing::info!(mode = ?config.feed.mode, "Starting news screen");
    ui::runtime::run(
        runtime.handle().clone(),
        config.feed,
        initial,
        Arc::new(client),
    )?;
    Ok(())
}

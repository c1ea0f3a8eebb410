//! CLI entrypoint for Session Summary
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow};
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use summary_application::{
    LoadSummaryUseCase, NoObserver, SummaryController, SummaryObserver,
};
use summary_domain::SummaryState;
use summary_infrastructure::{ConfigLoader, HttpSummaryGateway};
use summary_presentation::{
    Cli, ConsoleFormatter, LoadingSpinner, OutputFormatter, SimpleProgress, SummaryPage,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // stdout carries the rendered summary; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        println!("{}", ConfigLoader::describe_config_sources());
        return Ok(ExitCode::SUCCESS);
    }

    info!("Starting Session Summary");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;

    let overrides = cli.config_overrides();
    if !overrides.is_empty() {
        debug!("Command-line overrides: {:?}", overrides);
    }
    config.apply_overrides(&overrides);

    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    // Create infrastructure adapter (HTTP gateway)
    let gateway = Arc::new(HttpSummaryGateway::new(&config.backend)?);
    info!(
        "Backend: {} (fetch strategy: {})",
        gateway.base_url(),
        config.fetch.strategy
    );

    let observer: Arc<dyn SummaryObserver> = if cli.quiet {
        Arc::new(NoObserver)
    } else if std::io::stderr().is_terminal() {
        Arc::new(LoadingSpinner::new())
    } else {
        Arc::new(SimpleProgress)
    };

    let use_case = LoadSummaryUseCase::new(gateway).with_strategy(config.fetch.strategy);
    let controller = SummaryController::new(use_case).with_observer(observer);

    let context = cli.session_context();
    if context.fetch_key().is_none() {
        warn!("Both --session-id and --user-id are needed to fetch a summary");
    }

    let (state, interrupted) = tokio::select! {
        state = controller.update(&context) => (state, false),
        Ok(()) = tokio::signal::ctrl_c() => {
            warn!("Interrupted; cancelling summary fetch");
            controller.cancel();
            (controller.state(), true)
        }
    };

    // Output results
    let formatter = ConsoleFormatter::new(config.output.color);
    let page = SummaryPage::new(&context, &state);
    println!("{}", formatter.render(&page, config.output.format));

    Ok(match state {
        _ if interrupted => ExitCode::from(130),
        SummaryState::Failed(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

//! foodtrace - Application entry point
//!
//! CLI-based entry point that dispatches to various commands.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use foodtrace::{
    chain::{ContractReader, FixtureReader},
    cli::{Cli, Commands},
    commands,
    config::Config,
    errors::AppResult,
    services::Services,
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let mut config = Config::from_env()?;
    if let Some(snapshot) = cli.snapshot {
        config.snapshot_path = snapshot;
    }
    tracing::debug!("Configuration loaded");

    // The wallet/provider bridge lives outside this crate; the CLI reads
    // from a registry snapshot instead.
    let reader: Arc<dyn ContractReader> = Arc::new(FixtureReader::from_path(
        &config.snapshot_path,
        config.user_registry_address.clone(),
        config.supply_chain_address.clone(),
    )?);
    let services = Services::from_reader(reader, &config);

    match cli.command {
        Commands::Users(args) => commands::users::execute(args, &services).await,
        Commands::Ingredients(args) => commands::ingredients::execute(args, &services).await,
        Commands::Products(args) => commands::products::execute(args, &services).await,
        Commands::Session(args) => commands::session::execute(args, &services, &config).await,
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}

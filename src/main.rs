//! gate.io Disperser Setup CLI
//!
//! Collects exchange API credentials and withdrawal parameters for the
//! disperser and persists them as local JSON settings files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::error;

// Use the library crate
use gate_disperser::cli::commands;
use gate_disperser::config::Config;

/// Interactive setup for the gate.io withdrawal disperser
#[derive(Parser)]
#[command(name = "disperse")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full setup flow (API credentials, then script settings)
    Setup,

    /// Configure exchange API credentials only
    Api,

    /// Configure withdrawal parameters only
    Script,

    /// Show the persisted configuration (secret masked)
    Show,

    /// Force-refresh the currency autocomplete cache
    RefreshCurrencies,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gate_disperser=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Setup => commands::setup(&config).await,
        Commands::Api => commands::api(&config),
        Commands::Script => commands::script(&config).await,
        Commands::Show => commands::show(&config),
        Commands::RefreshCurrencies => commands::refresh_currencies(&config).await,
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

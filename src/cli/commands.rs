//! CLI command implementations

use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::cli::prompt::TermPrompter;
use crate::cli::setup::SetupFlow;
use crate::config::Config;
use crate::currencies::CurrencyCache;
use crate::exchange::GateClient;
use crate::paths::Paths;
use crate::settings::{ApiSettings, ScriptSettings};

fn build_client(config: &Config) -> Result<GateClient> {
    let client = GateClient::new(
        config.exchange.host.as_str(),
        Duration::from_millis(config.exchange.timeout_ms),
    )?;
    Ok(client)
}

fn prepare_paths(config: &Config) -> Result<Paths> {
    let paths = Paths::new(&config.storage.base_dir);
    paths.ensure_dirs()?;
    Ok(paths)
}

/// Run the full setup flow: API credentials, then script settings
pub async fn setup(config: &Config) -> Result<()> {
    let paths = prepare_paths(config)?;
    let client = build_client(config)?;
    let prompter = TermPrompter;
    let flow = SetupFlow::new(&client, &prompter, &paths);

    flow.acquire_api_settings()?;
    let script = flow.acquire_script_settings().await?;

    println!(
        "Setup complete: dispersing {} via {} ({} - {} per address)",
        script.currency, script.chain, script.min_amount, script.max_amount
    );
    Ok(())
}

/// Configure API credentials only
pub fn api(config: &Config) -> Result<()> {
    let paths = prepare_paths(config)?;
    let client = build_client(config)?;
    let prompter = TermPrompter;
    let flow = SetupFlow::new(&client, &prompter, &paths);

    flow.acquire_api_settings()?;
    println!("API credentials saved");
    Ok(())
}

/// Configure script settings only
pub async fn script(config: &Config) -> Result<()> {
    let paths = prepare_paths(config)?;
    let client = build_client(config)?;
    let prompter = TermPrompter;
    let flow = SetupFlow::new(&client, &prompter, &paths);

    let script = flow.acquire_script_settings().await?;
    println!(
        "Script settings saved: {} via {} ({} - {})",
        script.currency, script.chain, script.min_amount, script.max_amount
    );
    Ok(())
}

/// Print the persisted configuration with the secret masked
pub fn show(config: &Config) -> Result<()> {
    let paths = Paths::new(&config.storage.base_dir);

    match ApiSettings::load_if_exists(&paths.api_settings())? {
        Some(api) => println!("{}", api.masked_display()),
        None => println!("API settings: (not configured)"),
    }

    match ScriptSettings::load_if_exists(&paths.script_settings())? {
        Some(script) => println!(
            "Script settings:\n  currency: {}\n  chain: {}\n  min_amount: {}\n  max_amount: {}",
            script.currency, script.chain, script.min_amount, script.max_amount
        ),
        None => println!("Script settings: (not configured)"),
    }

    Ok(())
}

/// Force-refresh the currency autocomplete cache
pub async fn refresh_currencies(config: &Config) -> Result<()> {
    let paths = prepare_paths(config)?;
    let client = build_client(config)?;

    let cache = CurrencyCache::new(paths.currencies_cache());
    let currencies = cache.refresh(&client).await?;

    info!("Refreshed currency cache");
    println!("{} withdrawable currencies cached", currencies.len());
    Ok(())
}

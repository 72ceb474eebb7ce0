//! Configuration loading and validation

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub exchange: ExchangeConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Base directory for settings and the autocomplete cache
    #[serde(default = "default_base_dir")]
    pub base_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    std::env::var("GATE_HOST").unwrap_or_else(|_| "https://api.gateio.ws/api/v4".into())
}

fn default_timeout_ms() -> u64 {
    10000
}

fn default_base_dir() -> String {
    ".".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let settings = config::Config::builder()
            // Start with defaults
            .set_default("exchange.host", default_host())?
            .set_default("exchange.timeout_ms", default_timeout_ms() as i64)?
            .set_default("storage.base_dir", default_base_dir())?
            // Load from file if exists
            .add_source(config::File::from(path).required(false))
            // Override with environment variables (prefix DISPERSER_)
            .add_source(
                config::Environment::with_prefix("DISPERSER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        let config: Config = settings
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.exchange.host.is_empty() {
            anyhow::bail!("exchange.host must not be empty");
        }

        if self.exchange.timeout_ms == 0 {
            anyhow::bail!("exchange.timeout_ms must be positive");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exchange: ExchangeConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

//! Persisted settings for the disperser
//!
//! Two value objects, each saved as pretty-printed JSON at a fixed path:
//! API credentials (`settings/api.json`) and withdrawal parameters
//! (`settings/script.json`). No encryption, no schema versioning.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// Exchange API credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    pub key: String,
    pub secret: String,
}

impl ApiSettings {
    /// Load credentials from a JSON file
    ///
    /// Malformed JSON propagates as an error; callers do not recover locally.
    pub fn load(path: &Path) -> Result<Self> {
        load_json(path)
    }

    /// Load credentials if the file exists, `None` otherwise
    pub fn load_if_exists(path: &Path) -> Result<Option<Self>> {
        if path.exists() {
            Ok(Some(Self::load(path)?))
        } else {
            Ok(None)
        }
    }

    /// Write credentials as JSON to the given path
    pub fn save(&self, path: &Path) -> Result<()> {
        save_json(self, path)?;
        info!("Saved API settings to {}", path.display());
        Ok(())
    }

    /// Display form with the secret hidden
    pub fn masked_display(&self) -> String {
        format!(
            "API settings:\n  key: {}\n  secret: {}",
            self.key,
            if self.secret.is_empty() {
                "(not set)"
            } else {
                "***"
            }
        )
    }
}

/// Withdrawal parameters for the disperser script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptSettings {
    pub currency: String,
    pub chain: String,
    pub min_amount: f64,
    pub max_amount: f64,
}

impl ScriptSettings {
    pub fn load(path: &Path) -> Result<Self> {
        load_json(path)
    }

    pub fn load_if_exists(path: &Path) -> Result<Option<Self>> {
        if path.exists() {
            Ok(Some(Self::load(path)?))
        } else {
            Ok(None)
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        save_json(self, path)?;
        info!("Saved script settings to {}", path.display());
        Ok(())
    }
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Settings(format!("Failed to read {}: {}", path.display(), e)))?;

    serde_json::from_str(&content)
        .map_err(|e| Error::Settings(format!("Failed to parse {}: {}", path.display(), e)))
}

fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)
        .map_err(|e| Error::Settings(format!("Failed to write {}: {}", path.display(), e)))?;
    Ok(())
}

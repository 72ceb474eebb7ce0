//! Interactive setup flow
//!
//! Sequences the prompts for API credentials and script settings, applies
//! the validators, offers "leave blank to keep the previous value" when a
//! prior settings file exists, and persists the result. Chains are always
//! fetched live for the chosen currency and re-selected; they never get the
//! keep-previous shortcut.

use tracing::{info, warn};

use crate::currencies::CurrencyCache;
use crate::error::{Error, Result};
use crate::exchange::ExchangeApi;
use crate::paths::Paths;
use crate::settings::{ApiSettings, ScriptSettings};
use crate::validate::{CurrencyValidator, FloatOrBlankValidator, FloatValidator};

use super::prompt::Prompter;

/// Interactive configuration acquisition
pub struct SetupFlow<'a, C, P> {
    client: &'a C,
    prompter: &'a P,
    paths: &'a Paths,
}

impl<'a, C, P> SetupFlow<'a, C, P>
where
    C: ExchangeApi + Sync,
    P: Prompter,
{
    pub fn new(client: &'a C, prompter: &'a P, paths: &'a Paths) -> Self {
        Self {
            client,
            prompter,
            paths,
        }
    }

    /// Prompt for API credentials and persist them
    ///
    /// First run requires both values; on re-runs a blank line keeps the
    /// stored one.
    pub fn acquire_api_settings(&self) -> Result<ApiSettings> {
        let path = self.paths.api_settings();

        let settings = match ApiSettings::load_if_exists(&path)? {
            None => {
                let key = self.prompter.input("Enter API key", false)?;
                let secret = self.prompter.input("Enter API secret", false)?;
                ApiSettings { key, secret }
            }
            Some(prior) => {
                let key = self.prompter.input(
                    &format!(
                        "Current API key: {}\nEnter a new API key or leave blank to keep it",
                        prior.key
                    ),
                    true,
                )?;
                let secret = self.prompter.input(
                    "Current API secret: ***\nEnter a new API secret or leave blank to keep it",
                    true,
                )?;
                ApiSettings {
                    key: keep_or_replace(key, prior.key),
                    secret: keep_or_replace(secret, prior.secret),
                }
            }
        };

        settings.save(&path)?;
        Ok(settings)
    }

    /// Prompt for currency, chain and amount bounds, and persist them
    pub async fn acquire_script_settings(&self) -> Result<ScriptSettings> {
        let cache = CurrencyCache::new(self.paths.currencies_cache());
        let currencies = cache.get(self.client).await?;

        let path = self.paths.script_settings();
        let prior = ScriptSettings::load_if_exists(&path)?;

        let currency_validator = CurrencyValidator::new(&currencies);
        let currency_prompt = match &prior {
            Some(p) => format!(
                "Current currency: {}\nEnter another currency or leave blank to keep it",
                p.currency
            ),
            None => "Enter currency".to_string(),
        };
        let mut currency = self.prompter.autocomplete(
            &currency_prompt,
            &currencies,
            &currency_validator,
            prior.is_some(),
        )?;
        if currency.is_empty() {
            // Only reachable when a prior file exists
            currency = prior
                .as_ref()
                .map(|p| p.currency.clone())
                .ok_or_else(|| Error::Prompt("Currency is required".to_string()))?;
        }

        // Chains are fetched live for the chosen currency, never cached
        let chains: Vec<String> = self
            .client
            .list_currency_chains(&currency)
            .await?
            .into_iter()
            .map(|c| c.chain)
            .collect();
        if chains.is_empty() {
            return Err(Error::Api(format!(
                "Exchange reports no chains for {}",
                currency
            )));
        }
        let chain = self.prompter.select("Select chain", &chains)?;

        let (min_amount, max_amount) = loop {
            let min = self.prompt_amount("min amount", prior.as_ref().map(|p| p.min_amount))?;
            let max = self.prompt_amount("max amount", prior.as_ref().map(|p| p.max_amount))?;
            if min > max {
                warn!("min amount {} exceeds max amount {}", min, max);
                continue;
            }
            break (min, max);
        };

        let settings = ScriptSettings {
            currency,
            chain,
            min_amount,
            max_amount,
        };
        settings.save(&path)?;
        info!(
            "Script settings: {} via {} ({} - {})",
            settings.currency, settings.chain, settings.min_amount, settings.max_amount
        );
        Ok(settings)
    }

    fn prompt_amount(&self, label: &str, prior: Option<f64>) -> Result<f64> {
        match prior {
            Some(current) => {
                let prompt = format!(
                    "Current {}: {}\nEnter another {} or leave blank to keep it",
                    label, current, label
                );
                let raw = self
                    .prompter
                    .input_validated(&prompt, &FloatOrBlankValidator, true)?;
                if raw.trim().is_empty() {
                    Ok(current)
                } else {
                    parse_amount(&raw)
                }
            }
            None => {
                let raw = self.prompter.input_validated(
                    &format!("Enter {}", label),
                    &FloatValidator,
                    false,
                )?;
                parse_amount(&raw)
            }
        }
    }
}

fn keep_or_replace(input: String, prior: String) -> String {
    if input.is_empty() {
        prior
    } else {
        input
    }
}

fn parse_amount(raw: &str) -> Result<f64> {
    raw.trim()
        .parse()
        .map_err(|e| Error::Prompt(format!("Invalid amount {:?}: {}", raw, e)))
}

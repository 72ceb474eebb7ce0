//! gate.io REST v4 client
//!
//! Both endpoints used here are public; credentials are only needed by the
//! dispersal side of the tool, never by setup.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{Error, Result};

use super::{ChainInfo, CurrencyInfo, ExchangeApi};

/// gate.io REST API client
pub struct GateClient {
    http: reqwest::Client,
    host: String,
}

impl GateClient {
    /// Build a client against the given API host (e.g. `https://api.gateio.ws/api/v4`)
    pub fn new(host: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Api(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            host: host.into(),
        })
    }
}

#[async_trait]
impl ExchangeApi for GateClient {
    async fn list_currencies(&self) -> Result<Vec<CurrencyInfo>> {
        let url = format!("{}/spot/currencies", self.host);
        debug!("GET {}", url);

        let resp = self.http.get(&url).send().await?.error_for_status()?;
        let currencies: Vec<CurrencyInfo> = resp.json().await?;

        debug!("Exchange returned {} currencies", currencies.len());
        Ok(currencies)
    }

    async fn list_currency_chains(&self, currency: &str) -> Result<Vec<ChainInfo>> {
        let url = format!("{}/wallet/currency_chains", self.host);
        debug!("GET {} currency={}", url, currency);

        let resp = self
            .http
            .get(&url)
            .query(&[("currency", currency)])
            .send()
            .await?
            .error_for_status()?;
        let chains: Vec<ChainInfo> = resp.json().await?;

        debug!("{} supports {} chains", currency, chains.len());
        Ok(chains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_payload_deserialize() {
        // Trimmed-down /spot/currencies payload; unknown fields are ignored
        let json = r#"[
            {"currency": "BTC", "delisted": false, "withdraw_disabled": false,
             "deposit_disabled": false, "trade_disabled": false},
            {"currency": "XXX", "withdraw_disabled": true}
        ]"#;

        let currencies: Vec<CurrencyInfo> = serde_json::from_str(json).unwrap();
        assert_eq!(currencies.len(), 2);
        assert_eq!(currencies[0].currency, "BTC");
        assert!(!currencies[0].withdraw_disabled);
        assert!(currencies[1].withdraw_disabled);
    }

    #[test]
    fn test_currency_payload_missing_flag_defaults_to_enabled() {
        let json = r#"[{"currency": "ETH"}]"#;
        let currencies: Vec<CurrencyInfo> = serde_json::from_str(json).unwrap();
        assert!(!currencies[0].withdraw_disabled);
    }

    #[test]
    fn test_chain_payload_deserialize() {
        let json = r#"[
            {"chain": "ETH", "name_cn": "", "name_en": "Ethereum", "is_withdraw_disabled": 0},
            {"chain": "ARBEVM", "name_en": "Arbitrum", "is_withdraw_disabled": 0}
        ]"#;

        let chains: Vec<ChainInfo> = serde_json::from_str(json).unwrap();
        assert_eq!(chains.len(), 2);
        assert_eq!(chains[0].chain, "ETH");
        assert_eq!(chains[1].chain, "ARBEVM");
    }

    #[test]
    fn test_client_builds() {
        let client = GateClient::new("https://api.gateio.ws/api/v4", Duration::from_secs(10));
        assert!(client.is_ok());
    }
}

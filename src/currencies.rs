//! Withdrawable-currency autocomplete cache
//!
//! The exchange's currency list is fetched once, filtered to withdrawable
//! entries and written to `autocomplete/currencies.json`. Subsequent runs
//! read the file verbatim; there is no TTL. Refreshing is explicit, via the
//! `refresh-currencies` subcommand.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::exchange::ExchangeApi;

/// File-backed list of withdrawable currency codes, in exchange order
pub struct CurrencyCache {
    path: PathBuf,
}

impl CurrencyCache {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Return the cached list, fetching and persisting it on first use
    pub async fn get<C: ExchangeApi + Sync>(&self, client: &C) -> Result<Vec<String>> {
        if self.path.exists() {
            debug!("Reading currency cache from {}", self.path.display());
            let content = std::fs::read_to_string(&self.path)?;
            let currencies: Vec<String> = serde_json::from_str(&content)?;
            return Ok(currencies);
        }

        self.refresh(client).await
    }

    /// Fetch the list from the exchange and rewrite the cache file
    ///
    /// Withdraw-disabled currencies are dropped; exchange order is preserved.
    pub async fn refresh<C: ExchangeApi + Sync>(&self, client: &C) -> Result<Vec<String>> {
        info!("Fetching currency list from the exchange...");

        let currencies: Vec<String> = client
            .list_currencies()
            .await?
            .into_iter()
            .filter(|c| !c.withdraw_disabled)
            .map(|c| c.currency)
            .collect();

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string(&currencies)?)?;

        info!(
            "Cached {} withdrawable currencies to {}",
            currencies.len(),
            self.path.display()
        );
        Ok(currencies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::{ChainInfo, CurrencyInfo};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::tempdir;

    struct FakeExchange {
        currencies: Vec<CurrencyInfo>,
        list_calls: AtomicUsize,
    }

    impl FakeExchange {
        fn new(entries: &[(&str, bool)]) -> Self {
            Self {
                currencies: entries
                    .iter()
                    .map(|(code, disabled)| CurrencyInfo {
                        currency: code.to_string(),
                        withdraw_disabled: *disabled,
                    })
                    .collect(),
                list_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ExchangeApi for FakeExchange {
        async fn list_currencies(&self) -> Result<Vec<CurrencyInfo>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.currencies.clone())
        }

        async fn list_currency_chains(&self, _currency: &str) -> Result<Vec<ChainInfo>> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn test_first_use_fetches_filters_and_writes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("autocomplete").join("currencies.json");
        let exchange = FakeExchange::new(&[("BTC", false), ("ETH", false), ("XXX", true)]);

        let cache = CurrencyCache::new(&path);
        let currencies = cache.get(&exchange).await.unwrap();

        assert_eq!(currencies, vec!["BTC", "ETH"]);

        // Cache file contains exactly the filtered list
        let raw = std::fs::read_to_string(&path).unwrap();
        let on_disk: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(on_disk, vec!["BTC", "ETH"]);
    }

    #[tokio::test]
    async fn test_existing_cache_is_read_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("currencies.json");
        std::fs::write(&path, r#"["OLD","STALE"]"#).unwrap();

        let exchange = FakeExchange::new(&[("BTC", false)]);
        let cache = CurrencyCache::new(&path);
        let currencies = cache.get(&exchange).await.unwrap();

        assert_eq!(currencies, vec!["OLD", "STALE"]);
        assert_eq!(exchange.list_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_refresh_overwrites_stale_cache() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("currencies.json");
        std::fs::write(&path, r#"["OLD"]"#).unwrap();

        let exchange = FakeExchange::new(&[("BTC", false), ("ETH", false)]);
        let cache = CurrencyCache::new(&path);
        let currencies = cache.refresh(&exchange).await.unwrap();

        assert_eq!(currencies, vec!["BTC", "ETH"]);
        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, r#"["BTC","ETH"]"#);
    }

    #[tokio::test]
    async fn test_order_is_preserved() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("currencies.json");
        let exchange = FakeExchange::new(&[("ZEC", false), ("ABC", false), ("MID", false)]);

        let cache = CurrencyCache::new(&path);
        let currencies = cache.get(&exchange).await.unwrap();

        assert_eq!(currencies, vec!["ZEC", "ABC", "MID"]);
    }
}

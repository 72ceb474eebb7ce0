//! Exchange API collaborator
//!
//! The setup flow only needs two read-only capabilities: the full currency
//! list (with the withdraw-disabled flag) and the chains supported by a
//! given currency. They sit behind a trait so tests can substitute a fake
//! client instead of hitting the network.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod gate;

pub use gate::GateClient;

/// One entry from the exchange's currency list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub currency: String,
    #[serde(default)]
    pub withdraw_disabled: bool,
}

/// One chain a currency can be withdrawn on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainInfo {
    pub chain: String,
}

/// Read-only exchange capabilities required by the setup flow
#[async_trait]
pub trait ExchangeApi {
    /// List all currencies known to the exchange
    async fn list_currencies(&self) -> Result<Vec<CurrencyInfo>>;

    /// List the chains a given currency can be withdrawn on
    async fn list_currency_chains(&self, currency: &str) -> Result<Vec<ChainInfo>>;
}

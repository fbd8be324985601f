//! RPC client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COMMITMENT, DEFAULT_RPC_URL, DEFAULT_TIMEOUT_SECS, RPC_COMMITMENT_ENV, RPC_URL_ENV,
};

/// Settings for talking to a Solana JSON-RPC node.
///
/// Passed explicitly to [`crate::rpc::HttpTransactionFetcher::new`]; nothing in
/// the crate reads an endpoint from process-wide state on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RpcConfig {
    /// JSON-RPC endpoint URL
    pub url: String,
    /// Commitment level: `processed`, `confirmed` or `finalized`
    pub commitment: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Highest transaction version the node may return (0 allows v0 transactions)
    pub max_supported_transaction_version: Option<u8>,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_RPC_URL.to_string(),
            commitment: DEFAULT_COMMITMENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_supported_transaction_version: Some(0),
        }
    }
}

impl RpcConfig {
    /// Config for `url` with every other field at its default
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Defaults, overridden by `RPC_URL` and `RPC_COMMITMENT` when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(RPC_URL_ENV) {
            if !url.trim().is_empty() {
                config.url = url;
            }
        }
        if let Ok(commitment) = std::env::var(RPC_COMMITMENT_ENV) {
            if !commitment.trim().is_empty() {
                config.commitment = commitment;
            }
        }
        config
    }

    pub fn with_commitment(mut self, commitment: impl Into<String>) -> Self {
        self.commitment = commitment.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

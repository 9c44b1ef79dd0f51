//! High-level client: `PortalClient` with nested sub-client accessors.
//!
//! Each flow has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared HTTP handle, and accessor methods.

use crate::config::PortalConfig;
use crate::domain::relay::client::Relay;
use crate::domain::token::client::Tokens;
use crate::domain::trade::client::Trades;
use crate::error::PortalError;
use crate::http::{Endpoints, PortalHttp};
use crate::network;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::relay::client::Relay as RelayClient;
pub use crate::domain::token::client::{LaunchReceipt, Tokens as TokensClient};
pub use crate::domain::trade::client::{TradeReceipt, Trades as TradesClient};

/// The primary entry point.
///
/// Provides nested sub-client accessors for each flow:
/// `client.tokens()`, `client.trades()`, `client.relay()`.
/// The client holds no wallet; every signing call takes one explicitly.
#[derive(Clone)]
pub struct PortalClient {
    pub(crate) http: PortalHttp,
    /// Explorer prefix for confirmation links.
    pub(crate) explorer_url: String,
    /// Launch platform segment of the create-token path.
    pub(crate) platform: String,
    /// Venue sent with trade builds.
    pub(crate) dex: String,
}

impl PortalClient {
    pub fn builder() -> PortalClientBuilder {
        PortalClientBuilder::default()
    }

    /// Client pointed at the endpoints and timeout from `config`.
    pub fn from_config(config: &PortalConfig) -> Result<Self, PortalError> {
        Self::builder()
            .endpoints(config.endpoints.clone())
            .explorer_url(&config.explorer_url)
            .timeout(config.timeout)
            .build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn tokens(&self) -> Tokens<'_> {
        Tokens { client: self }
    }

    pub fn trades(&self) -> Trades<'_> {
        Trades { client: self }
    }

    pub fn relay(&self) -> Relay<'_> {
        Relay { client: self }
    }

    pub fn http(&self) -> &PortalHttp {
        &self.http
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn dex(&self) -> &str {
        &self.dex
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct PortalClientBuilder {
    endpoints: Endpoints,
    explorer_url: String,
    platform: String,
    dex: String,
    timeout: Duration,
}

impl Default for PortalClientBuilder {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            explorer_url: network::DEFAULT_EXPLORER_URL.to_string(),
            platform: network::DEFAULT_PLATFORM.to_string(),
            dex: network::DEFAULT_DEX.to_string(),
            timeout: Duration::from_secs(network::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl PortalClientBuilder {
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn metadata_url(mut self, url: &str) -> Self {
        self.endpoints.metadata_url = url.to_string();
        self
    }

    pub fn api_url(mut self, url: &str) -> Self {
        self.endpoints.api_url = url.to_string();
        self
    }

    pub fn relay_url(mut self, url: &str) -> Self {
        self.endpoints.relay_url = url.to_string();
        self
    }

    pub fn explorer_url(mut self, url: &str) -> Self {
        self.explorer_url = url.to_string();
        self
    }

    pub fn platform(mut self, platform: &str) -> Self {
        self.platform = platform.to_string();
        self
    }

    pub fn dex(mut self, dex: &str) -> Self {
        self.dex = dex.to_string();
        self
    }

    /// Per-request timeout for every endpoint.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<PortalClient, PortalError> {
        if self.platform.trim().is_empty() {
            return Err(PortalError::Config("platform cannot be empty".to_string()));
        }
        if self.dex.trim().is_empty() {
            return Err(PortalError::Config("dex cannot be empty".to_string()));
        }

        Ok(PortalClient {
            http: PortalHttp::new(self.endpoints, self.timeout)?,
            explorer_url: self.explorer_url,
            platform: self.platform.trim().to_string(),
            dex: self.dex.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = PortalClient::builder().build().unwrap();
        assert_eq!(client.http().endpoints(), &Endpoints::default());
        assert_eq!(client.platform(), "pumpfun");
        assert_eq!(client.dex(), "pumpfun");
        assert_eq!(client.explorer_url, network::DEFAULT_EXPLORER_URL);
    }

    #[test]
    fn test_builder_overrides() {
        let client = PortalClient::builder()
            .api_url("http://127.0.0.1:4000/")
            .relay_url("http://127.0.0.1:4001")
            .platform("moonshot")
            .build()
            .unwrap();
        assert_eq!(client.http().endpoints().api_url, "http://127.0.0.1:4000");
        assert_eq!(client.http().endpoints().relay_url, "http://127.0.0.1:4001");
        assert_eq!(
            client.http().endpoints().metadata_url,
            network::DEFAULT_METADATA_URL
        );
        assert_eq!(client.platform(), "moonshot");
    }

    #[test]
    fn test_from_config() {
        let secret = solana_keypair::Keypair::new().to_base58_string();
        let config = PortalConfig::from_lookup(|key: &str| match key {
            "PRIVATE_KEY" => Some(secret.clone()),
            "PORTAL_RELAY_URL" => Some("http://127.0.0.1:7000".to_string()),
            "PORTAL_EXPLORER_URL" => Some("https://explorer.example/tx".to_string()),
            _ => None,
        })
        .unwrap();

        let client = PortalClient::from_config(&config).unwrap();
        assert_eq!(client.http().endpoints().relay_url, "http://127.0.0.1:7000");
        assert_eq!(client.http().endpoints().api_url, network::DEFAULT_API_URL);
        assert_eq!(client.explorer_url, "https://explorer.example/tx");
    }

    #[test]
    fn test_empty_venue_rejected() {
        assert!(matches!(
            PortalClient::builder().dex(" ").build(),
            Err(PortalError::Config(_))
        ));
    }
}

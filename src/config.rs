//! Process configuration, read from environment variables.
//!
//! | variable | default |
//! |---|---|
//! | `PRIVATE_KEY` | required, base58 secret key |
//! | `RPC_URL` | unset |
//! | `PORTAL_METADATA_URL` | [`DEFAULT_METADATA_URL`](crate::network::DEFAULT_METADATA_URL) |
//! | `PORTAL_API_URL` | [`DEFAULT_API_URL`](crate::network::DEFAULT_API_URL) |
//! | `PORTAL_RELAY_URL` | [`DEFAULT_RELAY_URL`](crate::network::DEFAULT_RELAY_URL) |
//! | `PORTAL_EXPLORER_URL` | [`DEFAULT_EXPLORER_URL`](crate::network::DEFAULT_EXPLORER_URL) |
//! | `PORTAL_HTTP_TIMEOUT_SECS` | 30 |

use std::time::Duration;

use crate::error::{PortalError, PortalResult};
use crate::http::Endpoints;
use crate::network;
use crate::wallet::Wallet;

#[derive(Clone)]
pub struct PortalConfig {
    private_key: String,
    pub rpc_url: Option<String>,
    pub endpoints: Endpoints,
    pub explorer_url: String,
    pub timeout: Duration,
}

impl PortalConfig {
    /// Read from the process environment.
    pub fn from_env() -> PortalResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through an arbitrary lookup (tests pass a map instead of touching
    /// the real environment). Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> PortalResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let private_key = get("PRIVATE_KEY")
            .ok_or_else(|| PortalError::Config("PRIVATE_KEY not set".to_string()))?;

        let timeout_secs = match get("PORTAL_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().ok().filter(|s| *s > 0).ok_or_else(|| {
                PortalError::Config(format!(
                    "PORTAL_HTTP_TIMEOUT_SECS must be a positive integer, got '{}'",
                    raw
                ))
            })?,
            None => network::DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            private_key,
            rpc_url: get("RPC_URL"),
            endpoints: Endpoints {
                metadata_url: get("PORTAL_METADATA_URL")
                    .unwrap_or_else(|| network::DEFAULT_METADATA_URL.to_string()),
                api_url: get("PORTAL_API_URL")
                    .unwrap_or_else(|| network::DEFAULT_API_URL.to_string()),
                relay_url: get("PORTAL_RELAY_URL")
                    .unwrap_or_else(|| network::DEFAULT_RELAY_URL.to_string()),
            },
            explorer_url: get("PORTAL_EXPLORER_URL")
                .unwrap_or_else(|| network::DEFAULT_EXPLORER_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Decode `PRIVATE_KEY` into the signing wallet.
    pub fn wallet(&self) -> PortalResult<Wallet> {
        Wallet::from_base58(&self.private_key)
    }
}

impl std::fmt::Debug for PortalConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalConfig")
            .field("private_key", &"<redacted>")
            .field("rpc_url", &self.rpc_url)
            .field("endpoints", &self.endpoints)
            .field("explorer_url", &self.explorer_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

//! Network URL constants for the launch, build and relay endpoints.

/// Metadata storage (IPFS upload) base URL.
pub const DEFAULT_METADATA_URL: &str = "https://pump.fun";

/// Transaction-build API base URL.
pub const DEFAULT_API_URL: &str = "https://api.solanaportal.io";

/// Jito block-engine relay base URL.
pub const DEFAULT_RELAY_URL: &str = "https://tokyo.mainnet.block-engine.jito.wtf";

/// Explorer prefix used to build the confirmation link.
pub const DEFAULT_EXPLORER_URL: &str = "https://solscan.io/tx";

/// Launch platform used in the create-token path.
pub const DEFAULT_PLATFORM: &str = "pumpfun";

/// Venue used for trades.
pub const DEFAULT_DEX: &str = "pumpfun";

/// Relay type tag sent with every build request.
pub const RELAY_TYPE: &str = "jito";

/// Default per-request HTTP timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Build the explorer link for a transaction signature.
pub fn explorer_tx_url(explorer_url: &str, signature: &str) -> String {
    format!("{}/{}", explorer_url.trim_end_matches('/'), signature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explorer_tx_url() {
        assert_eq!(
            explorer_tx_url(DEFAULT_EXPLORER_URL, "SIG123"),
            "https://solscan.io/tx/SIG123"
        );
        assert_eq!(
            explorer_tx_url("https://solscan.io/tx/", "abc"),
            "https://solscan.io/tx/abc"
        );
    }
}

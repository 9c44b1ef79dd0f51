//! Relay domain: submitting signed transactions to the block engine.

pub mod client;
pub mod wire;

pub use wire::{RelayRequest, RelayResponse};

use crate::network::explorer_tx_url;

/// A transaction accepted by the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Signature returned by the relay.
    pub signature: String,
    /// Explorer link for the signature.
    pub url: String,
}

impl Submission {
    pub fn new(signature: String, explorer_url: &str) -> Self {
        let url = explorer_tx_url(explorer_url, &signature);
        Self { signature, url }
    }
}

impl std::fmt::Display for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}

//! # Solana Portal
//!
//! Launch and trade pump.fun tokens through the Solana Portal build API,
//! signing locally and submitting through a Jito block-engine relay.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Shared newtypes, domain models, errors, endpoint constants
//! 2. **Signing**: `Wallet` identity and the transaction signer
//! 3. **HTTP API**: `PortalHttp`, one method per remote endpoint, no retries
//! 4. **High-Level Client**: `PortalClient` with the create, trade and relay sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use solana_portal::prelude::*;
//!
//! let config = PortalConfig::from_env()?;
//! let wallet = config.wallet()?;
//! let client = PortalClient::from_config(&config)?;
//!
//! let launch = TokenLaunch::load("token.json")?;
//! let receipt = client.tokens().create(&wallet, &launch).await?;
//! println!("{receipt}");
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, sub-clients.
pub mod domain;

/// Pipeline error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Environment configuration.
pub mod config;

// ── Layer 2: Signing ─────────────────────────────────────────────────────────

/// Local keypair identity.
pub mod wallet;

/// Decode, sign and re-encode build-service transactions.
pub mod transaction;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `PortalClient`: the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{PubkeyStr, Slippage, TradeAction};

    // Domain types
    pub use crate::domain::relay::{RelayRequest, RelayResponse, Submission};
    pub use crate::domain::token::{ImageAsset, TokenDescriptor, TokenLaunch};
    pub use crate::domain::trade::{collect_trade, TradePrompt, TradeRequest};

    // Errors
    pub use crate::error::{PortalError, PortalResult};

    // Config + network
    pub use crate::config::PortalConfig;
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_METADATA_URL, DEFAULT_RELAY_URL};

    // Signing
    pub use crate::transaction::{sign_transaction, SignedTransaction};
    pub use crate::wallet::Wallet;

    // HTTP client + sub-clients
    pub use crate::client::{
        LaunchReceipt, PortalClient, PortalClientBuilder, RelayClient, TokensClient,
        TradeReceipt, TradesClient,
    };
    pub use crate::http::{Endpoints, PortalHttp};
}

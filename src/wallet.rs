//! Wallet identity: the local keypair that signs every transaction.
//!
//! The wallet is built once from a base58 secret key and then passed by
//! reference into each call. Nothing in the crate reads it from ambient state,
//! and the secret key never leaves the process.

use solana_keypair::Keypair;
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_signer::Signer;

use crate::error::{PortalError, PortalResult};
use crate::shared::PubkeyStr;

/// A signing identity: keypair plus its cached base58 address.
pub struct Wallet {
    keypair: Keypair,
    address: PubkeyStr,
}

impl Wallet {
    /// Wrap an existing keypair.
    pub fn new(keypair: Keypair) -> Self {
        let address = PubkeyStr::from_pubkey(keypair.pubkey());
        Self { keypair, address }
    }

    /// Parse a base58-encoded 64-byte secret key (the `PRIVATE_KEY` format).
    pub fn from_base58(secret: &str) -> PortalResult<Self> {
        let secret = secret.trim();
        if secret.is_empty() {
            return Err(PortalError::Config("PRIVATE_KEY is empty".to_string()));
        }
        let bytes = bs58::decode(secret)
            .into_vec()
            .map_err(|_| PortalError::Config("PRIVATE_KEY is not valid base58".to_string()))?;
        let keypair = Keypair::try_from(bytes.as_slice()).map_err(|e| {
            PortalError::Config(format!(
                "PRIVATE_KEY is not a valid keypair ({} bytes): {}",
                bytes.len(),
                e
            ))
        })?;
        Ok(Self::new(keypair))
    }

    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Base58 address, as sent in `wallet_address` fields.
    pub fn address(&self) -> &PubkeyStr {
        &self.address
    }

    /// Sign raw message bytes.
    pub fn sign_message(&self, message: &[u8]) -> Signature {
        self.keypair.sign_message(message)
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

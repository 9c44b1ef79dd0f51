//! Transaction signer: base64 in, base58 out.
//!
//! The build API returns an unsigned [`VersionedTransaction`] as base64 text;
//! the relay wants the signed transaction as base58 text. In between, the
//! transaction is treated as opaque. The only thing read from the message is
//! the list of required signer keys, to find the wallet's signature slot.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use solana_signature::Signature;
use solana_transaction::versioned::VersionedTransaction;

use crate::error::{PortalError, PortalResult};
use crate::wallet::Wallet;

/// A signed transaction, ready for relay submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    /// The wallet's signature, which is also the transaction id.
    pub signature: Signature,
    /// Bincode bytes encoded as base58.
    pub encoded: String,
}

/// Decode base64 transport text into raw transaction bytes.
pub fn decode_base64(text: &str) -> PortalResult<Vec<u8>> {
    BASE64_STANDARD
        .decode(text.trim())
        .map_err(|e| PortalError::Deserialize(format!("base64 decode error: {}", e)))
}

/// Encode raw bytes as base64 transport text.
pub fn encode_base64(bytes: &[u8]) -> String {
    BASE64_STANDARD.encode(bytes)
}

/// Deserialize raw bytes into a versioned transaction.
pub fn deserialize_transaction(bytes: &[u8]) -> PortalResult<VersionedTransaction> {
    bincode::deserialize::<VersionedTransaction>(bytes)
        .map_err(|e| PortalError::Deserialize(format!("malformed transaction: {}", e)))
}

/// Fill the wallet's signature slot in `tx`.
///
/// The signature vector is sized to the message's required signature count.
/// Slots belonging to other signers are left as they are. Fails if the wallet
/// is not one of the required signers.
pub fn sign_in_place(tx: &mut VersionedTransaction, wallet: &Wallet) -> PortalResult<Signature> {
    let required = tx.message.header().num_required_signatures as usize;
    let signer_keys = tx.message.static_account_keys();
    let wallet_key = wallet.pubkey();

    let slot = signer_keys
        .iter()
        .take(required)
        .position(|key| *key == wallet_key)
        .ok_or_else(|| {
            PortalError::Signer(format!(
                "wallet {} is not a required signer of this transaction",
                wallet.address()
            ))
        })?;

    let signature = wallet.sign_message(&tx.message.serialize());
    tx.signatures.resize(required, Signature::default());
    tx.signatures[slot] = signature;
    Ok(signature)
}

/// Serialize a (signed) transaction and encode it as base58.
pub fn encode_base58(tx: &VersionedTransaction) -> PortalResult<String> {
    let bytes = bincode::serialize(tx)
        .map_err(|e| PortalError::Signer(format!("failed to serialize transaction: {}", e)))?;
    Ok(bs58::encode(bytes).into_string())
}

/// Full signer stage: base64 → transaction → signed → base58.
pub fn sign_transaction(unsigned_base64: &str, wallet: &Wallet) -> PortalResult<SignedTransaction> {
    let bytes = decode_base64(unsigned_base64)?;
    let mut tx = deserialize_transaction(&bytes)?;
    let signature = sign_in_place(&mut tx, wallet)?;
    let encoded = encode_base58(&tx)?;

    tracing::debug!(
        signature = %signature,
        signers = tx.signatures.len(),
        encoded_len = encoded.len(),
        "Signed transaction"
    );

    Ok(SignedTransaction { signature, encoded })
}

//! Wire types for the block-engine relay (JSON-RPC `sendTransaction`).

use serde::{Deserialize, Serialize};

use crate::error::PortalError;

/// JSON-RPC request envelope: `{jsonrpc, id, method, params: [tx]}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelayRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: Vec<String>,
}

impl RelayRequest {
    /// Envelope for a single base58-encoded signed transaction.
    pub fn send_transaction(encoded: &str) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: 1,
            method: "sendTransaction".to_string(),
            params: vec![encoded.to_string()],
        }
    }
}

/// Shape of an accepted relay reply.
#[derive(Debug, Deserialize)]
struct Accepted {
    result: String,
}

/// Relay reply, classified.
///
/// Only a JSON body with a non-empty string `result` is accepted. Everything
/// else (error objects, `null` results, non-JSON bodies) is rejected and keeps
/// the raw body for diagnosis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayResponse {
    Accepted { signature: String },
    Rejected { status: u16, body: String },
}

impl RelayResponse {
    pub fn parse(status: u16, body: &str) -> Self {
        match serde_json::from_str::<Accepted>(body) {
            Ok(Accepted { result }) if !result.is_empty() => Self::Accepted { signature: result },
            _ => Self::Rejected {
                status,
                body: body.to_string(),
            },
        }
    }

    /// The accepted signature, or a relay error with the raw body.
    pub fn into_signature(self) -> Result<String, PortalError> {
        match self {
            Self::Accepted { signature } => Ok(signature),
            Self::Rejected { status, body } => Err(PortalError::Relay { status, body }),
        }
    }
}

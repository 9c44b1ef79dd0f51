//! Wire types for the metadata upload and create-token build endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::TokenDescriptor;
use crate::shared::PubkeyStr;

/// Text fields of the `/api/ipfs` multipart form, in submission order.
///
/// Optional social links are only sent when present and non-empty.
/// `showName` is always sent, as the literal text `"true"` or `"false"`.
pub fn metadata_form_fields(descriptor: &TokenDescriptor) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("name", descriptor.name.clone()),
        ("symbol", descriptor.symbol.clone()),
        ("description", descriptor.description.clone()),
    ];
    let socials = [
        ("twitter", &descriptor.twitter),
        ("telegram", &descriptor.telegram),
        ("website", &descriptor.website),
    ];
    for (key, value) in socials {
        if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
            fields.push((key, v.to_string()));
        }
    }
    fields.push((
        "showName",
        if descriptor.show_name { "true" } else { "false" }.to_string(),
    ));
    fields
}

/// Metadata block echoed back by the upload endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadedMetadata {
    pub name: String,
    pub symbol: String,
    /// Remaining fields (description, image, socials...), kept for logging.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// `POST /api/ipfs` success body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetadataUploadResponse {
    #[serde(rename = "metadataUri")]
    pub metadata_uri: String,
    pub metadata: UploadedMetadata,
}

/// `POST /api/create/token/<platform>` body.
///
/// `amount`, `slippage` and `tip` are copied from the descriptor untouched.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateTokenRequest {
    pub wallet_address: PubkeyStr,
    pub name: String,
    pub symbol: String,
    #[serde(rename = "metadataUri")]
    pub metadata_uri: String,
    pub amount: Number,
    pub slippage: Number,
    pub tip: Number,
    #[serde(rename = "type")]
    pub relay_type: String,
}

impl CreateTokenRequest {
    /// Name and symbol come from the upload response; issuance parameters
    /// come from the descriptor.
    pub fn new(
        wallet_address: PubkeyStr,
        descriptor: &TokenDescriptor,
        uploaded: &MetadataUploadResponse,
    ) -> Self {
        Self {
            wallet_address,
            name: uploaded.metadata.name.clone(),
            symbol: uploaded.metadata.symbol.clone(),
            metadata_uri: uploaded.metadata_uri.clone(),
            amount: descriptor.amount.clone(),
            slippage: descriptor.slippage.clone(),
            tip: descriptor.tip.clone(),
            relay_type: crate::network::RELAY_TYPE.to_string(),
        }
    }
}

//! Wire types for the `/api/trading` build endpoint.

use rust_decimal::Decimal;
use serde::Serialize;

use super::TradeRequest;
use crate::shared::{PubkeyStr, Slippage, TradeAction};

/// `POST /api/trading` body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TradeBuildRequest {
    pub wallet_address: PubkeyStr,
    pub action: TradeAction,
    pub dex: String,
    pub mint: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub slippage: Slippage,
    #[serde(with = "rust_decimal::serde::float")]
    pub tip: Decimal,
    #[serde(rename = "type")]
    pub relay_type: String,
}

impl TradeBuildRequest {
    pub fn new(wallet_address: PubkeyStr, dex: &str, request: &TradeRequest) -> Self {
        Self {
            wallet_address,
            action: request.action,
            dex: dex.to_string(),
            mint: request.mint.clone(),
            amount: request.amount,
            slippage: request.slippage,
            tip: request.tip,
            relay_type: crate::network::RELAY_TYPE.to_string(),
        }
    }
}

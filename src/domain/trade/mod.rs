//! Trade domain: buy/sell requests against a bonding-curve token.

pub mod client;
pub mod prompt;
pub mod wire;

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{PortalError, PortalResult};
use crate::shared::{Slippage, TradeAction};

pub use prompt::{collect_trade, TradePrompt};

/// A validated trade request.
///
/// `amount` is SOL to spend for a buy and tokens to sell for a sell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeRequest {
    pub action: TradeAction,
    pub mint: String,
    pub amount: Decimal,
    pub slippage: Slippage,
    pub tip: Decimal,
}

impl TradeRequest {
    pub fn new(
        action: TradeAction,
        mint: &str,
        amount: Decimal,
        slippage: Slippage,
        tip: Decimal,
    ) -> PortalResult<Self> {
        Ok(Self {
            action,
            mint: parse_mint(mint)?,
            amount: check_amount(amount)?,
            slippage,
            tip: check_tip(tip)?,
        })
    }
}

pub(crate) fn parse_mint(input: &str) -> PortalResult<String> {
    let mint = input.trim();
    if mint.is_empty() {
        return Err(PortalError::Validation("Mint address cannot be empty.".to_string()));
    }
    Ok(mint.to_string())
}

pub(crate) fn parse_amount(input: &str) -> PortalResult<Decimal> {
    let amount = Decimal::from_str(input.trim())
        .map_err(|_| PortalError::Validation(format!("Invalid amount '{}'.", input.trim())))?;
    check_amount(amount)
}

pub(crate) fn parse_tip(input: &str) -> PortalResult<Decimal> {
    let tip = Decimal::from_str(input.trim())
        .map_err(|_| PortalError::Validation(format!("Invalid tip amount '{}'.", input.trim())))?;
    check_tip(tip)
}

fn check_amount(amount: Decimal) -> PortalResult<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(PortalError::Validation(format!(
            "Invalid amount {}: must be greater than zero.",
            amount
        )));
    }
    Ok(amount)
}

fn check_tip(tip: Decimal) -> PortalResult<Decimal> {
    if tip <= Decimal::ZERO {
        return Err(PortalError::Validation(format!(
            "Invalid tip amount {}: must be greater than zero.",
            tip
        )));
    }
    Ok(tip)
}

//! Shared newtypes used across the create and trade domains.
//!
//! These types are serialization-transparent: they serialize identically to
//! the raw JSON the build API expects, so wire structs can embed them directly.

use serde::{Deserialize, Serialize, Serializer};
use std::str::FromStr;

use crate::error::PortalError;

// ─── PubkeyStr ───────────────────────────────────────────────────────────────

/// A Solana public key stored as a base58 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PubkeyStr(String);

impl PubkeyStr {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn from_pubkey(pk: solana_pubkey::Pubkey) -> Self {
        Self(pk.to_string())
    }
}

impl std::fmt::Display for PubkeyStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for PubkeyStr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

// ─── TradeAction ─────────────────────────────────────────────────────────────

/// Trade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    Buy,
    Sell,
}

impl TradeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl std::fmt::Display for TradeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TradeAction {
    type Err = PortalError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            _ => Err(PortalError::Validation(
                "Invalid action. Please enter 'buy' or 'sell'.".to_string(),
            )),
        }
    }
}

// ─── Slippage ────────────────────────────────────────────────────────────────

/// Slippage tolerance as a whole percentage, 1–100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slippage(u8);

impl Slippage {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    pub fn new(percent: u32) -> Result<Self, PortalError> {
        if (Self::MIN as u32..=Self::MAX as u32).contains(&percent) {
            Ok(Self(percent as u8))
        } else {
            Err(PortalError::Validation(format!(
                "Invalid slippage {}: must be between {} and {}",
                percent,
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn percent(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Slippage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl FromStr for Slippage {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let percent = s.trim().parse::<u32>().map_err(|_| {
            PortalError::Validation(format!("Invalid slippage '{}': not an integer", s.trim()))
        })?;
        Self::new(percent)
    }
}

impl Serialize for Slippage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

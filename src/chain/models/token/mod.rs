mod registry;

pub use registry::*;

use alloy::primitives::utils::format_units;
use alloy::primitives::{Address, U256};
use std::fmt;

use crate::chain::ChainError;

/// Decimals assumed for a token whose `decimals()` accessor cannot be read.
pub const DEFAULT_DECIMALS: u8 = 18;

/// A token contract whose balance is reported for every requested wallet.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedToken {
    pub key: String,
    pub address: Address,
    /// Human-unit balance that must be strictly exceeded to count as completed.
    pub threshold: Option<f64>,
}

impl TrackedToken {
    pub fn new(key: impl Into<String>, address: Address, threshold: Option<f64>) -> Self {
        Self {
            key: key.into(),
            address,
            threshold,
        }
    }

    /// `None` when no threshold is configured for this token.
    pub fn is_completed(&self, balance: f64) -> Option<bool> {
        self.threshold.map(|threshold| balance > threshold)
    }
}

impl fmt::Display for TrackedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.threshold {
            Some(threshold) => write!(f, "{} ({}) threshold {}", self.key, self.address, threshold),
            None => write!(f, "{} ({}) without threshold", self.key, self.address),
        }
    }
}

/// Convert a raw token amount into human units by dividing by `10^decimals`.
pub fn to_human_amount_f64(amount: U256, decimals: u8) -> Result<f64, ChainError> {
    format_units(amount, decimals)
        .map_err(|e| ChainError::Units(e.to_string()))?
        .parse::<f64>()
        .map_err(|e| ChainError::Units(e.to_string()))
}

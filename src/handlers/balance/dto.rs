use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Query string accepted by the balance endpoint
#[derive(Debug, Deserialize)]
pub struct BalanceQuery {
    pub address: Option<String>,
}

/// Per-token entry of a balance response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceResult {
    /// Balance in human units, `null` when it could not be read.
    pub balance: Option<f64>,
    /// `null` when the token has no completion threshold.
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BalanceResult {
    pub fn resolved(balance: f64, completed: Option<bool>) -> Self {
        Self {
            balance: Some(balance),
            completed,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            balance: None,
            completed: Some(false),
            error: Some(error.into()),
        }
    }
}

/// Response model for GET /balances
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub wallet: String,
    pub data: BTreeMap<String, BalanceResult>,
}

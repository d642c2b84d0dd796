use serde::Serialize;

use crate::chain::models::{address_to_string, TrackedToken};

/// Response model for token API endpoints
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub key: String,
    pub address: String,
    pub threshold: Option<f64>,
}

impl From<&TrackedToken> for TokenResponse {
    fn from(token: &TrackedToken) -> Self {
        Self {
            key: token.key.clone(),
            address: address_to_string(&token.address),
            threshold: token.threshold,
        }
    }
}

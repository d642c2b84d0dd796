use alloy::primitives::Address;
use thiserror::Error;

/// Failures of the read-only calls made against the RPC node.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("{0}")]
    Rpc(String),

    #[error("{method}() call to {address} failed: {message}")]
    Contract {
        method: &'static str,
        address: Address,
        message: String,
    },

    #[error("Failed to convert raw amount: {0}")]
    Units(String),
}

use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, Provider};
use async_trait::async_trait;

use crate::chain::contracts::IERC20;
use crate::chain::ChainError;

/// Read-only view of the chain needed to report token balances.
#[async_trait]
pub trait TokenReader: Send + Sync {
    /// Current block height, used as a connectivity probe.
    async fn block_number(&self) -> Result<u64, ChainError>;

    async fn decimals(&self, token: Address) -> Result<u8, ChainError>;

    /// Raw balance of `owner`, in the token's smallest unit.
    async fn balance_of(&self, token: Address, owner: Address) -> Result<U256, ChainError>;
}

/// [`TokenReader`] backed by ERC-20 calls over an alloy provider.
#[derive(Clone)]
pub struct RpcTokenReader {
    provider: DynProvider,
}

impl RpcTokenReader {
    pub fn new(provider: DynProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl TokenReader for RpcTokenReader {
    async fn block_number(&self) -> Result<u64, ChainError> {
        self.provider
            .get_block_number()
            .await
            .map_err(|e| ChainError::Rpc(e.to_string()))
    }

    async fn decimals(&self, token: Address) -> Result<u8, ChainError> {
        let erc20 = IERC20::new(token, self.provider.clone());
        erc20
            .decimals()
            .call()
            .await
            .map_err(|e| ChainError::Contract {
                method: "decimals",
                address: token,
                message: e.to_string(),
            })
    }

    async fn balance_of(&self, token: Address, owner: Address) -> Result<U256, ChainError> {
        let erc20 = IERC20::new(token, self.provider.clone());
        erc20
            .balanceOf(owner)
            .call()
            .await
            .map_err(|e| ChainError::Contract {
                method: "balanceOf",
                address: token,
                message: e.to_string(),
            })
    }
}

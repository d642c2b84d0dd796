use alloy::primitives::Address;
use futures::future::join_all;
use log::{debug, error, info, warn};
use std::sync::Arc;

use crate::{
    chain::{
        models::{
            parse_wallet_address, to_human_amount_f64, TokenRegistry, TrackedToken,
            DEFAULT_DECIMALS,
        },
        providers::TokenReader,
        ChainError,
    },
    errors::ApiError,
    handlers::balance::dto::{BalanceResponse, BalanceResult},
};

/// Service layer that aggregates the configured token balances of a wallet
pub struct BalanceService {
    reader: Arc<dyn TokenReader>,
    registry: Arc<TokenRegistry>,
    network_name: String,
    fallback_decimals: u8,
}

impl BalanceService {
    pub fn new(
        reader: Arc<dyn TokenReader>,
        registry: Arc<TokenRegistry>,
        network_name: impl Into<String>,
    ) -> Self {
        Self {
            reader,
            registry,
            network_name: network_name.into(),
            fallback_decimals: DEFAULT_DECIMALS,
        }
    }

    /// Decimals used when a token's `decimals()` call fails
    pub fn with_fallback_decimals(mut self, fallback_decimals: u8) -> Self {
        self.fallback_decimals = fallback_decimals;
        self
    }

    /// Get the balance of every configured token for a wallet
    ///
    /// # Arguments
    /// * `address` - Wallet address as supplied by the client
    ///
    /// # Returns
    /// * `Ok(BalanceResponse)` - One entry per configured token, failed tokens included
    /// * `Err(ApiError::InvalidWalletAddress)` - Address missing or malformed, nothing was queried
    /// * `Err(ApiError::RpcUnavailable)` - The RPC node did not answer the connectivity probe
    pub async fn get_balances(&self, address: Option<&str>) -> Result<BalanceResponse, ApiError> {
        let wallet = address.unwrap_or_default();
        let owner = match parse_wallet_address(wallet) {
            Some(owner) => owner,
            None => {
                warn!("Rejected wallet address {:?}", wallet);
                return Err(ApiError::InvalidWalletAddress);
            }
        };

        self.check_connectivity().await?;

        let results = join_all(self.registry.tokens().iter().map(|token| async move {
            let result = self.get_token_balance(token, owner).await;
            (token.key.clone(), result)
        }))
        .await;

        Ok(BalanceResponse {
            wallet: wallet.to_string(),
            data: results.into_iter().collect(),
        })
    }

    async fn check_connectivity(&self) -> Result<u64, ApiError> {
        match self.reader.block_number().await {
            Ok(block_number) => {
                info!("{} block number: {}", self.network_name, block_number);
                Ok(block_number)
            }
            Err(e) => {
                error!("RPC connection failed: {}", e);
                Err(ApiError::RpcUnavailable {
                    network: self.network_name.clone(),
                    details: e.to_string(),
                })
            }
        }
    }

    async fn resolve_decimals(&self, token: &TrackedToken) -> u8 {
        match self.reader.decimals(token.address).await {
            Ok(decimals) => {
                debug!("{}.decimals() = {}", token.key, decimals);
                decimals
            }
            Err(e) => {
                warn!(
                    "Failed to fetch decimals() for {}, using {}: {}",
                    token.key, self.fallback_decimals, e
                );
                self.fallback_decimals
            }
        }
    }

    async fn get_token_balance(&self, token: &TrackedToken, owner: Address) -> BalanceResult {
        let decimals = self.resolve_decimals(token).await;
        match self.fetch_human_balance(token, owner, decimals).await {
            Ok(balance) => BalanceResult::resolved(balance, token.is_completed(balance)),
            Err(e) => {
                error!("Error fetching {} for {}: {}", token.key, owner, e);
                BalanceResult::failed(e.to_string())
            }
        }
    }

    async fn fetch_human_balance(
        &self,
        token: &TrackedToken,
        owner: Address,
        decimals: u8,
    ) -> Result<f64, ChainError> {
        let raw = self.reader.balance_of(token.address, owner).await?;
        to_human_amount_f64(raw, decimals)
    }
}

use super::TrackedToken;
use alloy::primitives::Address;
use anyhow::{anyhow, Result};
use log::info;
use std::collections::HashSet;
use std::str::FromStr;

use crate::config::TokenConfig;

/// Ordered, immutable set of tokens queried for every balance request.
#[derive(Debug, Default, Clone)]
pub struct TokenRegistry {
    tokens: Vec<TrackedToken>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Build the registry from configuration, rejecting malformed contract
    /// addresses and duplicate keys.
    pub fn from_config(configs: &[TokenConfig]) -> Result<Self> {
        let mut registry = Self::new();
        for config in configs {
            let address = Address::from_str(&config.address).map_err(|e| {
                anyhow!(
                    "Invalid contract address '{}' for token '{}': {}",
                    config.address,
                    config.key,
                    e
                )
            })?;
            registry.add_token(TrackedToken::new(
                config.key.clone(),
                address,
                config.threshold,
            ))?;
        }
        Ok(registry)
    }

    pub fn add_token(&mut self, token: TrackedToken) -> Result<()> {
        if token.key.is_empty() {
            return Err(anyhow!("Token key must not be empty"));
        }
        if self.contains_key(&token.key) {
            return Err(anyhow!("Duplicate token key '{}'", token.key));
        }
        info!("Token {}", token);
        self.tokens.push(token);
        Ok(())
    }

    pub fn get_token(&self, key: &str) -> Option<&TrackedToken> {
        self.tokens.iter().find(|token| token.key == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get_token(key).is_some()
    }

    pub fn tokens(&self) -> &[TrackedToken] {
        &self.tokens
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Contract addresses that appear under more than one key.
    pub fn shared_addresses(&self) -> Vec<Address> {
        let mut seen = HashSet::new();
        let mut shared = Vec::new();
        for token in &self.tokens {
            if !seen.insert(token.address) && !shared.contains(&token.address) {
                shared.push(token.address);
            }
        }
        shared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    fn token_config(key: &str, address: &str, threshold: Option<f64>) -> TokenConfig {
        TokenConfig {
            key: key.to_string(),
            address: address.to_string(),
            threshold,
        }
    }

    #[test]
    fn test_token_registry() {
        let mut registry = TokenRegistry::new();
        assert!(registry.is_empty());

        let token = TrackedToken::new(
            "hole",
            address!("0x32D146ff24E2AAe2a266A872f86474C9595C0C4F"),
            Some(50_000.0),
        );

        registry.add_token(token.clone()).unwrap();
        assert!(registry.contains_key("hole"));
        assert_eq!(registry.token_count(), 1);

        let retrieved = registry.get_token("hole").unwrap();
        assert_eq!(retrieved.address, token.address);
        assert_eq!(retrieved.threshold, Some(50_000.0));

        assert!(registry.get_token("missing").is_none());
    }

    #[test]
    fn test_from_config_keeps_order() {
        let registry = TokenRegistry::from_config(&[
            token_config("ping", "0x33E7fAB0a8a5da1A923180989bD617c9c2D1C493", None),
            token_config("hole", "0x32D146ff24E2AAe2a266A872f86474C9595C0C4F", Some(50_000.0)),
        ])
        .unwrap();

        let keys: Vec<&str> = registry.tokens().iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, vec!["ping", "hole"]);
        assert_eq!(registry.get_token("ping").unwrap().threshold, None);
    }

    #[test]
    fn test_from_config_rejects_duplicate_key() {
        let err = TokenRegistry::from_config(&[
            token_config("hole", "0x32D146ff24E2AAe2a266A872f86474C9595C0C4F", None),
            token_config("hole", "0x33E7fAB0a8a5da1A923180989bD617c9c2D1C493", None),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate token key 'hole'"));
    }

    #[test]
    fn test_from_config_rejects_bad_address() {
        let err = TokenRegistry::from_config(&[token_config("hole", "0x1234", None)]).unwrap_err();
        assert!(err.to_string().contains("Invalid contract address"));
    }

    #[test]
    fn test_shared_addresses() {
        let registry = TokenRegistry::from_config(&[
            token_config("a", "0x32D146ff24E2AAe2a266A872f86474C9595C0C4F", None),
            token_config("b", "0x32D146ff24E2AAe2a266A872f86474C9595C0C4F", Some(1.0)),
            token_config("c", "0x33E7fAB0a8a5da1A923180989bD617c9c2D1C493", None),
        ])
        .unwrap();
        assert_eq!(
            registry.shared_addresses(),
            vec![address!("0x32D146ff24E2AAe2a266A872f86474C9595C0C4F")]
        );
    }
}

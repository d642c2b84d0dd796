use alloy::primitives::Address;
use anyhow::{anyhow, Result};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;
use url::Url;

use crate::chain::models::DEFAULT_DECIMALS;

pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

/// Largest number of decimals `format_units` can convert.
pub const MAX_DECIMALS: u8 = 77;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub rpc: RpcConfig,
    pub cors: CorsConfig,
    #[serde(default)]
    pub balances: BalancesConfig,
    #[serde(default)]
    pub tokens: Vec<TokenConfig>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RpcConfig {
    /// Human name used in connectivity error messages.
    pub network_name: String,
    pub urls: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub supports_credentials: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BalancesConfig {
    #[serde(default = "default_fallback_decimals")]
    pub fallback_decimals: u8,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TokenConfig {
    pub key: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

fn default_fallback_decimals() -> u8 {
    DEFAULT_DECIMALS
}

impl Default for BalancesConfig {
    fn default() -> Self {
        Self {
            fallback_decimals: DEFAULT_DECIMALS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8081,
                log_level: "info".to_string(),
            },
            rpc: RpcConfig {
                network_name: "Somnia".to_string(),
                urls: vec!["https://rpc.ankr.com/somnia_testnet".to_string()],
            },
            cors: CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
                allowed_methods: vec!["GET".to_string()],
                allowed_headers: vec!["Accept".to_string(), "Content-Type".to_string()],
                supports_credentials: false,
            },
            balances: BalancesConfig::default(),
            tokens: Vec::new(),
        }
    }
}

impl RpcConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.urls.is_empty() {
            return Err(anyhow!("No RPC URL configured"));
        }

        for url in &self.urls {
            Url::parse(url).map_err(|e| anyhow!("Invalid RPC URL '{}': {}", url, e))?;
        }

        Ok(())
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let path = path.as_ref();
        info!("Loading config from {}", path.display());
        match Self::load_from_file(path) {
            Ok(config) => {
                info!("Config loaded from file");
                Ok(config)
            }
            Err(e) if is_not_found(e.as_ref()) => {
                info!(
                    "Config file {} not found, falling back to environment variables or defaults",
                    path.display()
                );
                Ok(Self::from_env())
            }
            Err(e) => {
                error!("Failed to load config from {}: {}", path.display(), e);
                Err(e)
            }
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(host) = std::env::var("SERVER_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = std::env::var("SERVER_PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                config.server.port = port_num;
            }
        }

        if let Ok(log_level) = std::env::var("RUST_LOG") {
            config.server.log_level = log_level;
        }

        if let Ok(urls) = std::env::var("RPC_URLS") {
            config.rpc.urls = split_list(&urls);
        }

        if let Ok(name) = std::env::var("RPC_NETWORK_NAME") {
            config.rpc.network_name = name;
        }

        if let Ok(origins) = std::env::var("CORS_ORIGINS") {
            config.cors.allowed_origins = split_list(&origins);
        }

        config
    }

    /// Reject configurations the server cannot start with.
    pub fn validate(&self) -> Result<()> {
        self.rpc.validate()?;

        if self.balances.fallback_decimals > MAX_DECIMALS {
            return Err(anyhow!(
                "fallback_decimals must be at most {}, got {}",
                MAX_DECIMALS,
                self.balances.fallback_decimals
            ));
        }

        let mut keys = HashSet::new();
        for token in &self.tokens {
            if !keys.insert(token.key.as_str()) {
                return Err(anyhow!("Duplicate token key '{}'", token.key));
            }
            Address::from_str(&token.address).map_err(|e| {
                anyhow!(
                    "Invalid contract address '{}' for token '{}': {}",
                    token.address,
                    token.key,
                    e
                )
            })?;
        }

        Ok(())
    }
}

fn is_not_found(error: &(dyn std::error::Error + Send + Sync + 'static)) -> bool {
    error
        .downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::client::RpcClient;
use alloy::transports::http::Http;
use alloy::transports::layers::FallbackLayer;
use anyhow::{anyhow, Result};
use std::num::NonZeroUsize;
use tower::ServiceBuilder;
use url::Url;

/// Build a read-only provider that spreads requests over every configured RPC
/// endpoint, falling back to the next one when a transport fails.
pub fn create_provider(rpcs: &[String]) -> Result<DynProvider> {
    let rpc_len =
        NonZeroUsize::new(rpcs.len()).ok_or_else(|| anyhow!("No RPC URL configured"))?;
    let fallback_layer = FallbackLayer::default().with_active_transport_count(rpc_len);

    let transports = rpcs
        .iter()
        .map(|url| {
            Url::parse(url)
                .map(Http::new)
                .map_err(|e| anyhow!("Invalid RPC URL '{}': {}", url, e))
        })
        .collect::<Result<Vec<_>>>()?;

    let transport = ServiceBuilder::new()
        .layer(fallback_layer)
        .service(transports);
    let client = RpcClient::builder().transport(transport, false);
    let provider = ProviderBuilder::new().connect_client(client);
    Ok(provider.erased())
}

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{info, warn, LevelFilter};
use std::sync::Arc;

use somnia_balance_api::{
    chain::{
        models::{address_to_string, TokenRegistry},
        providers::{create_provider, RpcTokenReader, TokenReader},
    },
    config::{Config, DEFAULT_CONFIG_PATH},
    handlers::balance::BalanceService,
    routes::configure_routes,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "info")]
    log_level: String,

    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 1. Parse command line arguments and setup logging
    let args = Args::parse();
    let log_level = match args.log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level.to_string())).init();

    // 2. Load and validate configuration
    let config = Config::load(&args.config).map_err(std::io::Error::other)?;
    config.validate().map_err(std::io::Error::other)?;

    info!("Starting token balance API...");
    info!("Configuration loaded: {:?}", config);

    let registry = TokenRegistry::from_config(&config.tokens).map_err(std::io::Error::other)?;
    if registry.is_empty() {
        warn!("No tokens configured, balance responses will be empty");
    }
    for address in registry.shared_addresses() {
        warn!(
            "Contract {} is configured under more than one key",
            address_to_string(&address)
        );
    }
    let registry = Arc::new(registry);

    // 3. Connect to the RPC endpoints
    let provider = create_provider(&config.rpc.urls).map_err(std::io::Error::other)?;
    let reader: Arc<dyn TokenReader> = Arc::new(RpcTokenReader::new(provider));
    info!(
        "Using {} RPC endpoint(s) for {}",
        config.rpc.urls.len(),
        config.rpc.network_name
    );

    let balance_service = web::Data::new(
        BalanceService::new(reader, registry.clone(), config.rpc.network_name.clone())
            .with_fallback_decimals(config.balances.fallback_decimals),
    );
    let registry = web::Data::from(registry);

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);

    info!("Server will be available at http://{}", bind_addr);

    HttpServer::new(move || {
        // Configure CORS from config
        let allowed_origins = config.cors.allowed_origins.clone();

        let cors = Cors::default().allowed_origin_fn(move |origin, _req_head| {
            let origin_str = match origin.to_str() {
                Ok(s) => s,
                Err(_) => return false,
            };
            allowed_origins
                .iter()
                .any(|allowed| allowed == "*" || origin_str == allowed)
        });

        let methods: Vec<actix_web::http::Method> = config
            .cors
            .allowed_methods
            .iter()
            .filter_map(|m| m.parse().ok())
            .collect();

        let cors = cors
            .allowed_methods(methods)
            .allowed_headers(config.cors.allowed_headers.clone())
            .max_age(3600);

        let cors = if config.cors.supports_credentials {
            cors.supports_credentials()
        } else {
            cors
        };

        App::new()
            .app_data(balance_service.clone())
            .app_data(registry.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await
}

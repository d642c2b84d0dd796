use actix_web::{web, HttpResponse, Result};

use crate::{
    errors::ApiError,
    handlers::balance::get_balances_handler,
    routes::{balance::configure_balance_routes, token::configure_token_routes},
};

/// Health check endpoint
async fn health_check() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({"status": "ok"})))
}

/// Malformed query strings are reported like any other bad address.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        log::warn!("Failed to parse query string: {}", err);
        ApiError::InvalidWalletAddress.into()
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config())
        .service(
            web::scope("/api/v1")
                .route("/health", web::get().to(health_check))
                .configure(configure_balance_routes)
                .configure(configure_token_routes),
        )
        // path used by the earlier serverless deployment
        .route("/api/getBalances", web::get().to(get_balances_handler));
}

use actix_web::{web, HttpResponse};
use log::info;

use crate::{chain::models::TokenRegistry, handlers::token::dto::TokenResponse};

/// GET /tokens - Returns the tokens whose balances are reported
///
/// # Returns
/// JSON array of TokenResponse objects in configuration order
pub async fn get_tokens_handler(registry: web::Data<TokenRegistry>) -> HttpResponse {
    info!("Handling GET /tokens request");

    let tokens: Vec<TokenResponse> = registry.tokens().iter().map(TokenResponse::from).collect();
    info!("Returning {} configured tokens", tokens.len());
    HttpResponse::Ok().json(tokens)
}

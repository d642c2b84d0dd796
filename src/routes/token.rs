use actix_web::web;

use crate::handlers::token::get_tokens_handler;

pub fn configure_token_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/tokens", web::get().to(get_tokens_handler));
}

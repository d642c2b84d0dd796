use actix_web::web;

use crate::handlers::balance::get_balances_handler;

pub fn configure_balance_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/balances", web::get().to(get_balances_handler));
}

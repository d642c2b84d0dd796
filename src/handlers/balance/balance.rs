use actix_web::{web, HttpResponse};
use log::{info, warn};

use crate::{
    errors::ApiError,
    handlers::balance::{dto::BalanceQuery, service::BalanceService},
};

/// GET /balances?address={address} - Returns the configured token balances of a wallet
///
/// # Arguments
/// * `service` - Balance aggregation service
/// * `query` - Query parameters containing the wallet address
///
/// # Returns
/// JSON object with the wallet echoed back and one BalanceResult per token
pub async fn get_balances_handler(
    service: web::Data<BalanceService>,
    query: web::Query<BalanceQuery>,
) -> Result<HttpResponse, ApiError> {
    info!("Handling GET /balances request");

    match service.get_balances(query.address.as_deref()).await {
        Ok(response) => {
            let failed = response
                .data
                .values()
                .filter(|result| result.error.is_some())
                .count();
            info!(
                "Retrieved {} balances for {} ({} failed)",
                response.data.len(),
                response.wallet,
                failed
            );
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            warn!("Balance request rejected: {}", e);
            Err(e)
        }
    }
}

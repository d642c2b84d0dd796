use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use derive_more::Display;
use serde_json::json;

pub const INVALID_WALLET_ADDRESS: &str = "Invalid wallet address";

#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "Invalid wallet address")]
    InvalidWalletAddress,

    #[display(fmt = "Cannot connect to {} RPC node: {}", network, details)]
    RpcUnavailable { network: String, details: String },
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidWalletAddress => StatusCode::BAD_REQUEST,
            ApiError::RpcUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::InvalidWalletAddress => HttpResponse::BadRequest().json(json!({
                "error": INVALID_WALLET_ADDRESS
            })),
            ApiError::RpcUnavailable {
                ref network,
                ref details,
            } => HttpResponse::ServiceUnavailable().json(json!({
                "error": format!("Cannot connect to {} RPC node", network),
                "details": details
            })),
        }
    }
}

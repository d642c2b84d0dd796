pub mod chain;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod routes;

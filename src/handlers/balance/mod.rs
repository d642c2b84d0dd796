pub mod balance;
pub mod dto;
pub mod service;

pub use balance::*;
pub use service::BalanceService;

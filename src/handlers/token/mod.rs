pub mod dto;
pub mod token;

pub use token::*;

pub mod token_reader;
pub mod utils;
pub use token_reader::*;
pub use utils::*;

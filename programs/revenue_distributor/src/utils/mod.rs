pub mod merkle;
pub mod pda;
pub mod token;

pub use merkle::verify;
pub use token::*;

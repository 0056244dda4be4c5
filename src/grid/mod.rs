mod direction;
mod hex;

pub use direction::*;
pub use hex::*;

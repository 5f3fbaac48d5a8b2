// Chirp domain models
pub mod chirp;

pub use chirp::*;

// Chirp domain handlers
pub mod chirp_handler;

pub use chirp_handler::*;

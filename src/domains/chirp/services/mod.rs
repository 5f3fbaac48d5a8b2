// Chirp domain services
pub mod chirp_service;
pub mod profanity;
pub mod state;

pub use chirp_service::*;
pub use profanity::*;
pub use state::*;

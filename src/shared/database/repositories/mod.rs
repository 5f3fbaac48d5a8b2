// All repositories module
pub mod auth;
pub mod chirp;

// Re-export all repositories for convenience
pub use auth::*;
pub use chirp::*;

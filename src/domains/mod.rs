// Domain modules
pub mod auth;
pub mod chirp;
pub mod admin;

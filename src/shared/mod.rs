// Shared module
pub mod config;
pub mod middleware;
pub mod database;
pub mod errors;
pub mod services;

pub use config::*;
pub use middleware::{AuthenticatedUser, RefreshBearer};
pub use database::{
    ChirpRepository, Database, MemoryDatabase, RefreshTokenRepository, UserRepository,
};
pub use errors::*;
pub use services::*;

// Admin domain module (metrics, reset, health)
pub mod handlers;
pub mod services;
pub mod routes;

pub use handlers::*;
pub use services::*;
pub use routes::*;

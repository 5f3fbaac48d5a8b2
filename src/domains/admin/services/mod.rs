// Admin domain services
pub mod admin_service;
pub mod metrics;

pub use admin_service::*;
pub use metrics::*;

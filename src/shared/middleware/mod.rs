// Shared middleware & extractors
pub mod auth;
pub mod bearer;
pub mod metrics;

pub use auth::*;
pub use bearer::*;
pub use metrics::*;

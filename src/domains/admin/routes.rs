// Admin domain routes
use axum::{routing::{get, post}, Router};
use crate::domains::admin::handlers::admin_handler;
use crate::shared::services::AppState;

/// Create admin router
pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(admin_handler::metrics))
        .route("/reset", post(admin_handler::reset))
}

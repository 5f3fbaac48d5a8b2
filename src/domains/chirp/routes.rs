// Chirp domain routes
// Chirp 도메인 라우터
use axum::{routing::get, Router};
use crate::domains::chirp::handlers::chirp_handler;
use crate::shared::services::AppState;

/// Create chirp router
/// Chirp 라우터 생성
pub fn create_chirp_router() -> Router<AppState> {
    Router::new()
        .route("/", get(chirp_handler::list_chirps).post(chirp_handler::create_chirp))
        .route(
            "/:chirp_id",
            get(chirp_handler::get_chirp).delete(chirp_handler::delete_chirp),
        )
}

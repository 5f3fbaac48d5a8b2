use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use crate::shared::services::AppState;

/// 정적 파일 요청 카운트 미들웨어
/// Counts every request reaching the static file server
pub async fn count_fileserver_hits(
    State(app_state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    app_state.metrics.record_fileserver_hit();
    next.run(request).await
}

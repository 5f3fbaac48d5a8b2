use crate::shared::services::AppState;
use crate::shared::errors::{AdminError, ApiErrorResponse};
use axum::{extract::State, http::StatusCode, response::Html};

/// 방문 수 페이지
#[utoipa::path(
    get,
    path = "/admin/metrics",
    responses(
        (status = 200, description = "HTML page with the file server hit count", content_type = "text/html")
    ),
    tag = "Admin"
)]
pub async fn metrics(State(app_state): State<AppState>) -> Html<String> {
    let hits = app_state.admin_service.fileserver_hits();
    Html(format!(
        r#"<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {hits} times!</p>
  </body>
</html>"#
    ))
}

/// 초기화 핸들러 (dev 전용)
#[utoipa::path(
    post,
    path = "/admin/reset",
    responses(
        (status = 200, description = "Hits reset and all users deleted"),
        (status = 403, description = "Not allowed outside the dev platform"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Admin"
)]
pub async fn reset(State(app_state): State<AppState>) -> Result<StatusCode, ApiErrorResponse> {
    app_state
        .admin_service
        .reset()
        .await
        .map_err(|e: AdminError| -> ApiErrorResponse { e.into() })?;

    Ok(StatusCode::OK)
}

/// 헬스 체크
#[utoipa::path(
    get,
    path = "/api/healthz",
    responses(
        (status = 200, description = "Service is up", body = String, content_type = "text/plain")
    ),
    tag = "Admin"
)]
pub async fn healthz() -> &'static str {
    "OK"
}

use crate::domains::chirp::models::{Chirp, CreateChirpRequest};
use crate::shared::services::AppState;
use crate::shared::errors::{ApiErrorResponse, ChirpError};
use crate::shared::middleware::auth::AuthenticatedUser;
use axum::{extract::{Path, State}, http::StatusCode, Json};
use uuid::Uuid;

fn parse_chirp_id(raw: &str) -> Result<Uuid, ChirpError> {
    Uuid::parse_str(raw).map_err(|_| ChirpError::InvalidId(raw.to_string()))
}

/// Chirp 작성 핸들러
/// Create chirp handler
/// Note: user_id는 JWT 토큰에서 자동 추출됨
#[utoipa::path(
    post,
    path = "/api/chirps",
    request_body = CreateChirpRequest,
    responses(
        (status = 201, description = "Chirp created", body = Chirp),
        (status = 400, description = "Chirp is too long"),
        (status = 401, description = "Unauthorized (missing or invalid token)"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Chirps",
    security(("BearerAuth" = []))
)]
pub async fn create_chirp(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(request): Json<CreateChirpRequest>,
) -> Result<(StatusCode, Json<Chirp>), ApiErrorResponse> {
    let chirp = app_state
        .chirp_state
        .chirp_service
        .create_chirp(authenticated_user.user_id, &request.body)
        .await
        .map_err(|e: ChirpError| -> ApiErrorResponse { e.into() })?;

    Ok((StatusCode::CREATED, Json(chirp)))
}

/// 전체 Chirp 조회 핸들러
#[utoipa::path(
    get,
    path = "/api/chirps",
    responses(
        (status = 200, description = "All chirps, oldest first", body = [Chirp]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Chirps"
)]
pub async fn list_chirps(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Chirp>>, ApiErrorResponse> {
    let chirps = app_state
        .chirp_state
        .chirp_service
        .list_chirps()
        .await
        .map_err(|e: ChirpError| -> ApiErrorResponse { e.into() })?;

    Ok(Json(chirps))
}

/// 단일 Chirp 조회 핸들러
#[utoipa::path(
    get,
    path = "/api/chirps/{chirpID}",
    params(
        ("chirpID" = String, Path, description = "Chirp ID (UUID)")
    ),
    responses(
        (status = 200, description = "Chirp found", body = Chirp),
        (status = 400, description = "Invalid chirp ID format"),
        (status = 404, description = "Chirp not found")
    ),
    tag = "Chirps"
)]
pub async fn get_chirp(
    State(app_state): State<AppState>,
    Path(chirp_id): Path<String>,
) -> Result<Json<Chirp>, ApiErrorResponse> {
    let chirp_id = parse_chirp_id(&chirp_id).map_err(|e| -> ApiErrorResponse { e.into() })?;

    let chirp = app_state
        .chirp_state
        .chirp_service
        .get_chirp(chirp_id)
        .await
        .map_err(|e: ChirpError| -> ApiErrorResponse { e.into() })?;

    Ok(Json(chirp))
}

/// Chirp 삭제 핸들러
/// Note: 자신의 Chirp만 삭제 가능 (JWT 토큰으로 소유권 검증)
#[utoipa::path(
    delete,
    path = "/api/chirps/{chirpID}",
    params(
        ("chirpID" = String, Path, description = "Chirp ID (UUID)")
    ),
    responses(
        (status = 204, description = "Chirp deleted"),
        (status = 401, description = "Unauthorized (missing or invalid token)"),
        (status = 403, description = "Forbidden (not your chirp)"),
        (status = 404, description = "Chirp not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Chirps",
    security(("BearerAuth" = []))
)]
pub async fn delete_chirp(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Path(chirp_id): Path<String>,
) -> Result<StatusCode, ApiErrorResponse> {
    let chirp_id = parse_chirp_id(&chirp_id).map_err(|e| -> ApiErrorResponse { e.into() })?;

    app_state
        .chirp_state
        .chirp_service
        .delete_chirp(authenticated_user.user_id, chirp_id)
        .await
        .map_err(|e: ChirpError| -> ApiErrorResponse { e.into() })?;

    Ok(StatusCode::NO_CONTENT)
}

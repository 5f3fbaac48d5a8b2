use crate::domains::auth::models::{
    SignupRequest, SigninRequest, SigninResponse, RefreshResponse,
    UpdateCredentialsRequest, UserResponse,
};
use crate::shared::services::AppState;
use crate::shared::errors::{ApiErrorResponse, AuthError};
use crate::shared::middleware::auth::{AuthenticatedUser, RefreshBearer};
use axum::{extract::State, http::StatusCode, Json};

// 회원가입 핸들러
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Bad request (email already exists)"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn signup(
    State(app_state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiErrorResponse> {
    // Service 호출 (비즈니스 로직)
    let user = app_state
        .auth_state
        .auth_service
        .signup(request)
        .await
        .map_err(|e: AuthError| -> ApiErrorResponse { e.into() })?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

// 로그인 핸들러
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = SigninRequest,
    responses(
        (status = 200, description = "Login successful", body = SigninResponse),
        (status = 401, description = "Invalid email or password"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn signin(
    State(app_state): State<AppState>,
    Json(request): Json<SigninRequest>,
) -> Result<Json<SigninResponse>, ApiErrorResponse> {
    // Service 호출 (비밀번호 검증 + Access/Refresh Token 발급)
    let result = app_state
        .auth_state
        .auth_service
        .signin(request)
        .await
        .map_err(|e: AuthError| -> ApiErrorResponse { e.into() })?;

    Ok(Json(SigninResponse {
        user: result.user.into(),
        token: result.access_token,
        refresh_token: result.refresh_token,
    }))
}

/// 토큰 갱신 핸들러
/// Refresh token handler (Authorization: Bearer <refresh token>)
#[utoipa::path(
    post,
    path = "/api/refresh",
    responses(
        (status = 200, description = "Token refreshed successfully", body = RefreshResponse),
        (status = 401, description = "Invalid, revoked or expired refresh token"),
        (status = 500, description = "Internal server error")
    ),
    security(("BearerAuth" = [])),
    tag = "Auth"
)]
pub async fn refresh(
    State(app_state): State<AppState>,
    RefreshBearer(refresh_token): RefreshBearer,
) -> Result<Json<RefreshResponse>, ApiErrorResponse> {
    let token = app_state
        .auth_state
        .auth_service
        .refresh_access_token(&refresh_token)
        .await
        .map_err(|e: AuthError| -> ApiErrorResponse { e.into() })?;

    Ok(Json(RefreshResponse { token }))
}

/// 로그아웃 핸들러 (Refresh Token 무효화)
/// Revoke handler (Authorization: Bearer <refresh token>)
#[utoipa::path(
    post,
    path = "/api/revoke",
    responses(
        (status = 204, description = "Refresh token revoked"),
        (status = 401, description = "Missing bearer token"),
        (status = 500, description = "Internal server error")
    ),
    security(("BearerAuth" = [])),
    tag = "Auth"
)]
pub async fn revoke(
    State(app_state): State<AppState>,
    RefreshBearer(refresh_token): RefreshBearer,
) -> Result<StatusCode, ApiErrorResponse> {
    app_state
        .auth_state
        .auth_service
        .logout(&refresh_token)
        .await
        .map_err(|e: AuthError| -> ApiErrorResponse { e.into() })?;

    Ok(StatusCode::NO_CONTENT)
}

/// 이메일/비밀번호 변경 핸들러
#[utoipa::path(
    put,
    path = "/api/users",
    request_body = UpdateCredentialsRequest,
    responses(
        (status = 200, description = "Credentials updated", body = UserResponse),
        (status = 400, description = "Email already in use"),
        (status = 401, description = "Unauthorized (missing or invalid token)"),
        (status = 500, description = "Internal server error")
    ),
    security(("BearerAuth" = [])),
    tag = "Auth"
)]
pub async fn update_credentials(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(request): Json<UpdateCredentialsRequest>,
) -> Result<Json<UserResponse>, ApiErrorResponse> {
    let user = app_state
        .auth_state
        .auth_service
        .update_credentials(authenticated_user.user_id, request)
        .await
        .map_err(|e: AuthError| -> ApiErrorResponse { e.into() })?;

    Ok(Json(user.into()))
}

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use uuid::Uuid;
use crate::shared::services::AppState;
use crate::shared::errors::AuthError;
use crate::shared::middleware::bearer::bearer_token_from_headers;

/// 인증된 사용자 정보 (Access Token 에서 추출)
/// Authenticated user information (extracted from a validated access token)
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// AuthenticatedUser를 Axum Extractor로 구현
///
/// 사용법:
/// ```ignore
/// pub async fn create_chirp(
///     State(app_state): State<AppState>,
///     authenticated_user: AuthenticatedUser,  // <- 이렇게 사용!
/// ) -> Result<...> {
///     let user_id = authenticated_user.user_id;
///     // ...
/// }
/// ```
#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 1. Authorization 헤더에서 토큰 추출
        let token = bearer_token_from_headers(&parts.headers)?;

        // 2. 서명 + 만료 검증 후 사용자 ID 획득
        let user_id = state.auth_state.auth_service.authenticate(&token)?;

        Ok(AuthenticatedUser { user_id })
    }
}

/// Bearer 로 전달된 Refresh Token (검증은 서비스에서)
/// Raw refresh token presented as a bearer credential
#[derive(Debug, Clone)]
pub struct RefreshBearer(pub String);

#[async_trait]
impl FromRequestParts<AppState> for RefreshBearer {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(RefreshBearer(bearer_token_from_headers(&parts.headers)?))
    }
}

use thiserror::Error;
use axum::{http::StatusCode, Json};
use uuid::Uuid;
use crate::shared::errors::{error_response, internal_error_response, BearerError, TokenError};

/// 인증 관련 에러
/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// 이메일이 이미 존재함
    /// Email already exists
    #[error("Email already exists: {email}")]
    EmailAlreadyExists { email: String },

    /// 잘못된 이메일 또는 비밀번호
    /// Invalid email or password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Authorization 헤더 문제
    /// Missing or unusable authorization header
    #[error("Invalid authorization header: {0}")]
    Bearer(#[from] BearerError),

    /// 잘못된, 위조된 또는 만료된 Access Token
    /// Invalid, forged or expired access token
    #[error("Invalid access token: {0}")]
    InvalidToken(TokenError),

    /// 알 수 없음, 무효화됨, 만료됨 모두 같은 에러로 처리
    /// Unknown, revoked and expired refresh tokens are indistinguishable
    #[error("Invalid or expired refresh token")]
    RefreshTokenNotFound,

    /// 소유자가 아닌 사용자의 변경 요청
    /// Identity does not own the targeted resource
    #[error("Forbidden: you don't have permission to modify this resource")]
    Forbidden,

    /// 사용자를 찾을 수 없음
    /// User not found
    #[error("User not found: id={id}")]
    UserNotFound { id: Uuid },

    /// 비밀번호 해싱 실패
    /// Failed to hash password
    #[error("Failed to hash password: {0}")]
    PasswordHashingFailed(String),

    /// 저장된 해시를 해석할 수 없음
    /// Stored password hash could not be parsed
    #[error("Failed to verify password: {0}")]
    PasswordVerificationFailed(String),

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러
    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(message) => AuthError::Internal(message),
            other => AuthError::InvalidToken(other),
        }
    }
}

/// AuthError를 HTTP 응답으로 변환
impl From<AuthError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: AuthError) -> Self {
        match &err {
            AuthError::EmailAlreadyExists { .. } => {
                error_response(StatusCode::BAD_REQUEST, err.to_string())
            }
            AuthError::InvalidCredentials
            | AuthError::Bearer(_)
            | AuthError::InvalidToken(_)
            | AuthError::RefreshTokenNotFound => {
                error_response(StatusCode::UNAUTHORIZED, err.to_string())
            }
            AuthError::Forbidden => {
                error_response(StatusCode::FORBIDDEN, err.to_string())
            }
            AuthError::UserNotFound { .. } => {
                error_response(StatusCode::NOT_FOUND, err.to_string())
            }
            AuthError::PasswordHashingFailed(_)
            | AuthError::PasswordVerificationFailed(_)
            | AuthError::DatabaseError(_)
            | AuthError::Internal(_) => internal_error_response(&err),
        }
    }
}

impl axum::response::IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        let response: (StatusCode, Json<serde_json::Value>) = self.into();
        response.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AuthError) -> StatusCode {
        let (status, _): (StatusCode, Json<serde_json::Value>) = err.into();
        status
    }

    #[test]
    fn test_auth_failures_map_to_unauthorized() {
        assert_eq!(status_of(AuthError::InvalidCredentials), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(AuthError::Bearer(BearerError::WrongScheme)), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(TokenError::Expired.into()), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(AuthError::RefreshTokenNotFound), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_forbidden_and_internal() {
        assert_eq!(status_of(AuthError::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(
            status_of(TokenError::Signing("hmac".into()).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_body_hides_details() {
        let (status, Json(body)) =
            <(StatusCode, Json<serde_json::Value>)>::from(AuthError::DatabaseError("relation \"users\" does not exist".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }
}

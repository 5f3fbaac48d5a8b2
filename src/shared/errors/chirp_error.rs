use thiserror::Error;
use axum::{http::StatusCode, Json};
use uuid::Uuid;
use crate::shared::errors::{error_response, internal_error_response, AuthError};

/// Chirp 관련 에러
/// Chirp-related errors
#[derive(Error, Debug)]
pub enum ChirpError {
    /// 본문이 최대 길이를 초과함
    /// Chirp body longer than allowed
    #[error("Chirp is too long: {length} characters (max {max})")]
    TooLong { length: usize, max: usize },

    /// 잘못된 Chirp ID 형식
    #[error("Invalid chirp ID format: {0}")]
    InvalidId(String),

    /// Chirp을 찾을 수 없음
    /// Chirp not found
    #[error("Chirp not found: id={id}")]
    NotFound { id: Uuid },

    /// 인증/인가 실패 (AuthError 위임)
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// ChirpError를 HTTP 응답으로 변환
impl From<ChirpError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: ChirpError) -> Self {
        match err {
            ChirpError::TooLong { .. } | ChirpError::InvalidId(_) => {
                error_response(StatusCode::BAD_REQUEST, err.to_string())
            }
            ChirpError::NotFound { .. } => {
                error_response(StatusCode::NOT_FOUND, err.to_string())
            }
            ChirpError::Auth(auth_err) => auth_err.into(),
            ChirpError::DatabaseError(_) => internal_error_response(&err),
        }
    }
}

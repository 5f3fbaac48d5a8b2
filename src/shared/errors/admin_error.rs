use thiserror::Error;
use axum::{http::StatusCode, Json};
use crate::shared::errors::{error_response, internal_error_response};

/// 관리자 엔드포인트 에러
#[derive(Error, Debug)]
pub enum AdminError {
    /// dev 환경이 아닌 곳에서 reset 시도
    #[error("Reset is only allowed on the dev platform")]
    ResetNotAllowed,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<AdminError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::ResetNotAllowed => error_response(StatusCode::FORBIDDEN, err.to_string()),
            AdminError::DatabaseError(_) => internal_error_response(&err),
        }
    }
}

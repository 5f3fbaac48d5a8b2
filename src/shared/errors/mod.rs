// Shared errors
pub mod auth_error;
pub mod chirp_error;
pub mod admin_error;
pub mod token_error;

pub use auth_error::*;
pub use chirp_error::*;
pub use admin_error::*;
pub use token_error::*;

use axum::{http::StatusCode, Json};
use serde_json::json;

/// 에러 응답 타입 (모든 핸들러 공통)
/// Error response returned by every handler
pub type ApiErrorResponse = (StatusCode, Json<serde_json::Value>);

/// `{"error": message}` 형식의 응답 생성
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> ApiErrorResponse {
    (status, Json(json!({ "error": message.into() })))
}

/// 내부 에러는 로그만 남기고 호출자에게는 일반 메시지만 반환
/// Internal failures are logged, the caller only sees a generic message
pub(crate) fn internal_error_response(err: &dyn std::error::Error) -> ApiErrorResponse {
    tracing::error!(error = %err, "internal error while handling request");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

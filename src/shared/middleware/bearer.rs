use axum::http::{header, HeaderMap};
use crate::shared::errors::BearerError;

/// Bearer 스킴 접두사 (대소문자 구분, 공백 1개)
pub const BEARER_PREFIX: &str = "Bearer ";

/// Authorization 헤더 값에서 토큰 추출
/// Extract the credential from an `Authorization: Bearer <token>` header value
///
/// - 헤더 없음 또는 빈 값 → `MissingHeader`
/// - `Bearer ` 로 시작하지 않음 → `WrongScheme`
/// - 앞뒤 공백 제거 후 빈 토큰 → `EmptyToken`
pub fn extract_bearer_token(header_value: Option<&str>) -> Result<&str, BearerError> {
    let value = match header_value {
        Some(v) if !v.is_empty() => v,
        _ => return Err(BearerError::MissingHeader),
    };

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(BearerError::WrongScheme)?
        .trim();

    if token.is_empty() {
        return Err(BearerError::EmptyToken);
    }
    Ok(token)
}

/// HTTP 헤더 맵에서 Bearer 토큰 추출
/// 표시 가능한 ASCII 가 아닌 헤더 값은 `WrongScheme`
pub fn bearer_token_from_headers(headers: &HeaderMap) -> Result<String, BearerError> {
    let header_value = match headers.get(header::AUTHORIZATION) {
        Some(value) => Some(value.to_str().map_err(|_| BearerError::WrongScheme)?),
        None => None,
    };

    extract_bearer_token(header_value).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extracts_token() {
        assert_eq!(extract_bearer_token(Some("Bearer abc")), Ok("abc"));
        assert_eq!(extract_bearer_token(Some("Bearer   abc  ")), Ok("abc"));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(extract_bearer_token(None), Err(BearerError::MissingHeader));
        assert_eq!(extract_bearer_token(Some("")), Err(BearerError::MissingHeader));
    }

    #[test]
    fn test_wrong_scheme() {
        assert_eq!(extract_bearer_token(Some("abc")), Err(BearerError::WrongScheme));
        assert_eq!(extract_bearer_token(Some("bearer abc")), Err(BearerError::WrongScheme));
        assert_eq!(extract_bearer_token(Some("Basic dXNlcjpwYXNz")), Err(BearerError::WrongScheme));
        assert_eq!(extract_bearer_token(Some("Bearer")), Err(BearerError::WrongScheme));
    }

    #[test]
    fn test_empty_token() {
        assert_eq!(extract_bearer_token(Some("Bearer ")), Err(BearerError::EmptyToken));
        assert_eq!(extract_bearer_token(Some("Bearer    ")), Err(BearerError::EmptyToken));
    }

    #[test]
    fn test_from_header_map() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token_from_headers(&headers), Err(BearerError::MissingHeader));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer xyz"));
        assert_eq!(bearer_token_from_headers(&headers), Ok("xyz".to_string()));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_bytes(b"Bearer \xff").unwrap());
        assert_eq!(bearer_token_from_headers(&headers), Err(BearerError::WrongScheme));
    }
}

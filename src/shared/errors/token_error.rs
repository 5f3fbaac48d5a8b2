use thiserror::Error;

/// Access Token 검증/발급 에러
/// Access token codec errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// 구조가 잘못된 토큰 (세그먼트, base64, JSON, issuer, subject)
    #[error("malformed token")]
    Malformed,

    /// 서명 불일치
    #[error("bad token signature")]
    BadSignature,

    /// 만료된 토큰
    #[error("token expired")]
    Expired,

    /// nbf 이전에 사용된 토큰
    #[error("token not yet valid")]
    NotYetValid,

    /// 서명 생성 실패 (내부 에러)
    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Authorization 헤더 파싱 에러
/// Bearer header parsing errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BearerError {
    #[error("authorization header missing")]
    MissingHeader,

    #[error("authorization header is not a bearer token")]
    WrongScheme,

    #[error("bearer token is empty")]
    EmptyToken,
}

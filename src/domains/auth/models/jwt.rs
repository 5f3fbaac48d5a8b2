use serde::{Deserialize, Serialize};
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Access Token 발급자 (iss claim)
/// Fixed issuer label of every access token
pub const ACCESS_TOKEN_ISSUER: &str = "chirpy";

/// JWT Claims (토큰에 포함될 데이터)
/// JWT Claims (data to be included in token)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// 발급자
    /// Issuer
    pub iss: String,

    /// 사용자 ID (UUID 문자열)
    /// Subject (user id)
    pub sub: String,

    /// 발급 시간 (Unix timestamp)
    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// 이 시간 이전에는 사용 불가 (Unix timestamp)
    /// Not before (Unix timestamp)
    pub nbf: i64,

    /// 만료 시간 (Unix timestamp)
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// 새 Claims 생성 (만료 시간 자동 계산)
    /// Create new Claims, `ttl` may be negative for an already expired token
    ///
    /// 만료 시각이 표현 범위를 벗어나면 `None`
    pub fn new(user_id: Uuid, issued_at: DateTime<Utc>, ttl: Duration) -> Option<Self> {
        let expires_at = issued_at.checked_add_signed(ttl)?;
        let now = issued_at.timestamp();

        Some(Self {
            iss: ACCESS_TOKEN_ISSUER.to_string(),
            sub: user_id.to_string(),
            iat: now,
            nbf: now,
            exp: expires_at.timestamp(),
        })
    }
}

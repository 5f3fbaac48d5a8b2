use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use utoipa::ToSchema;
use uuid::Uuid;

/// 사용자 모델 (DB 저장용)
/// User model (for database storage)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    /// Argon2 PHC 문자열 (알고리즘, 파라미터, salt 포함)
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 사용자 응답 모델 (비밀번호 해시 제외)
/// User response model (without password hash)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = UserResponse)]
pub struct UserResponse {
    pub id: Uuid,
    #[schema(example = "user@example.com")]
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// 사용자 생성 요청 (회원가입 시)
#[derive(Debug)]
pub struct UserCreate {
    pub email: String,
    pub password_hash: String,
}

/// 이메일/비밀번호 변경 요청 (저장소 전달용)
#[derive(Debug)]
pub struct UserCredentialsUpdate {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use utoipa::ToSchema;
use uuid::Uuid;

/// Chirp 본문 최대 길이 (문자 수)
/// Maximum chirp body length in characters
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Chirp 모델 (짧은 텍스트 게시물, 작성자 소유)
/// Chirp model: a short text post owned by its author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = Chirp)]
pub struct Chirp {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[schema(example = "I had something interesting for breakfast")]
    pub body: String,
    /// 작성자 (생성 후 변경 불가)
    /// Owner, immutable after creation
    pub user_id: Uuid,
}

/// Chirp 생성 요청 (저장소 전달용)
#[derive(Debug)]
pub struct ChirpCreate {
    pub body: String,
    pub user_id: Uuid,
}

// Chirp 작성 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = CreateChirpRequest)]
pub struct CreateChirpRequest {
    /// 본문 (최대 140자)
    /// Body (at most 140 characters)
    #[schema(example = "I had something interesting for breakfast")]
    pub body: String,
}

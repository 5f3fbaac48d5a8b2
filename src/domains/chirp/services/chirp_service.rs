use std::sync::Arc;
use crate::shared::database::ChirpRepository;
use crate::domains::auth::services::authorize;
use crate::domains::chirp::models::{Chirp, ChirpCreate, MAX_CHIRP_LENGTH};
use crate::domains::chirp::services::ProfanityFilter;
use crate::shared::errors::ChirpError;
use uuid::Uuid;

// Chirp 서비스
// ChirpService: handles chirp business logic
#[derive(Clone)]
pub struct ChirpService {
    chirps: Arc<dyn ChirpRepository>,
    profanity_filter: ProfanityFilter,
}

impl ChirpService {
    pub fn new(chirps: Arc<dyn ChirpRepository>, profanity_filter: ProfanityFilter) -> Self {
        Self {
            chirps,
            profanity_filter,
        }
    }

    /// 본문 길이 검증 (문자 수 기준)
    pub fn validate_body(body: &str) -> Result<(), ChirpError> {
        let length = body.chars().count();
        if length > MAX_CHIRP_LENGTH {
            return Err(ChirpError::TooLong {
                length,
                max: MAX_CHIRP_LENGTH,
            });
        }
        Ok(())
    }

    /// Chirp 작성
    /// Create a chirp owned by `user_id`
    ///
    /// 길이 검증은 저장 전에 수행, 비속어는 치환 후 저장
    pub async fn create_chirp(&self, user_id: Uuid, body: &str) -> Result<Chirp, ChirpError> {
        // 1. 길이 검증 (원문 + 저장될 본문)
        Self::validate_body(body)?;
        let cleaned = self.profanity_filter.clean(body);
        Self::validate_body(&cleaned)?;

        // 2. 비속어 치환된 본문 저장
        let chirp = self
            .chirps
            .create_chirp(ChirpCreate {
                body: cleaned,
                user_id,
            })
            .await
            .map_err(|e| ChirpError::DatabaseError(format!("Failed to create chirp: {:#}", e)))?;

        tracing::debug!(chirp_id = %chirp.id, user_id = %user_id, "chirp created");
        Ok(chirp)
    }

    /// 전체 Chirp 조회 (오래된 순)
    pub async fn list_chirps(&self) -> Result<Vec<Chirp>, ChirpError> {
        self.chirps
            .list_chirps()
            .await
            .map_err(|e| ChirpError::DatabaseError(format!("Failed to list chirps: {:#}", e)))
    }

    pub async fn get_chirp(&self, chirp_id: Uuid) -> Result<Chirp, ChirpError> {
        self.chirps
            .get_chirp(chirp_id)
            .await
            .map_err(|e| ChirpError::DatabaseError(format!("Failed to fetch chirp: {:#}", e)))?
            .ok_or(ChirpError::NotFound { id: chirp_id })
    }

    /// Chirp 삭제 (작성자만 가능)
    /// Delete a chirp; only its owner may do so
    pub async fn delete_chirp(&self, identity: Uuid, chirp_id: Uuid) -> Result<(), ChirpError> {
        // 1. Chirp 조회
        let chirp = self.get_chirp(chirp_id).await?;

        // 2. 소유권 검증 (토큰의 user_id와 작성자가 일치하는지 확인)
        authorize(identity, chirp.user_id)?;

        // 3. 삭제
        let deleted = self
            .chirps
            .delete_chirp(chirp.id)
            .await
            .map_err(|e| ChirpError::DatabaseError(format!("Failed to delete chirp: {:#}", e)))?;
        if !deleted {
            return Err(ChirpError::NotFound { id: chirp_id });
        }

        tracing::debug!(chirp_id = %chirp_id, "chirp deleted");
        Ok(())
    }
}

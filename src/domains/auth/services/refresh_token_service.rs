use std::sync::Arc;
use crate::shared::database::RefreshTokenRepository;
use crate::domains::auth::models::refresh_token::RefreshTokenCreate;
use crate::shared::errors::AuthError;
use chrono::{Duration, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use uuid::Uuid;

/// Refresh Token 엔트로피 (바이트)
/// 32 bytes = 256 bits, hex 인코딩 시 64자
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Refresh Token 저장소 서비스
/// Issues, resolves and revokes long-lived opaque session tokens
///
/// 상태 전이: Active → Revoked (명시적) 또는 Active → Expired (조회 시점에 관찰).
/// 조회는 토큰을 소비하지 않음 (만료 또는 revoke 전까지 재사용 가능).
///
/// 조회와 revoke 가 동시에 일어나면 revoke 가 반영되기 전에
/// Access Token 이 최대 한 번 더 발급될 수 있다.
#[derive(Clone)]
pub struct RefreshTokenStore {
    repository: Arc<dyn RefreshTokenRepository>,
    ttl: Duration,
}

impl RefreshTokenStore {
    pub fn new(repository: Arc<dyn RefreshTokenRepository>, ttl: Duration) -> Self {
        Self { repository, ttl }
    }

    /// Refresh Token 생성 (OS 난수 256비트, hex)
    /// Generate an unguessable refresh token value
    pub fn generate_token() -> String {
        let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    /// Refresh Token 발급 및 DB 저장
    /// Issue and persist a refresh token for `user_id`
    pub async fn issue(&self, user_id: Uuid) -> Result<String, AuthError> {
        let token = Self::generate_token();
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AuthError::Internal(format!("Refresh token lifetime out of range: {}", self.ttl)))?;

        self.repository
            .create(RefreshTokenCreate {
                token: token.clone(),
                user_id,
                created_at: now,
                expires_at,
            })
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to create refresh token: {:#}", e)))?;

        Ok(token)
    }

    /// 활성 토큰이면 사용자 ID 반환
    /// Resolve an active token to its user
    ///
    /// 알 수 없음 / revoke 됨 / 만료됨은 모두 `RefreshTokenNotFound` 로 구분 불가.
    pub async fn resolve_active_user(&self, token: &str) -> Result<Uuid, AuthError> {
        let stored = self
            .repository
            .find_by_token(token)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to find refresh token: {:#}", e)))?;

        match stored {
            Some(record) if record.is_active(Utc::now()) => Ok(record.user_id),
            _ => Err(AuthError::RefreshTokenNotFound),
        }
    }

    /// Refresh Token 무효화 (멱등)
    /// Revoke a token; already revoked or unknown tokens are a silent no-op
    pub async fn revoke(&self, token: &str) -> Result<(), AuthError> {
        let transitioned = self
            .repository
            .revoke(token, Utc::now())
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to revoke refresh token: {:#}", e)))?;

        if transitioned {
            tracing::debug!("refresh token revoked");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::auth::models::user::UserCreate;
    use crate::shared::database::{MemoryDatabase, UserRepository};

    async fn setup(ttl: Duration) -> (RefreshTokenStore, MemoryDatabase, Uuid) {
        let db = MemoryDatabase::new();
        let user = db
            .create_user(UserCreate {
                email: "saul@example.com".to_string(),
                password_hash: "hash".to_string(),
            })
            .await
            .unwrap();
        let store = RefreshTokenStore::new(Arc::new(db.clone()), ttl);
        (store, db, user.id)
    }

    #[test]
    fn test_generated_token_shape() {
        let token = RefreshTokenStore::generate_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(token, RefreshTokenStore::generate_token());
    }

    #[tokio::test]
    async fn test_issue_then_resolve() {
        let (store, db, user_id) = setup(Duration::days(60)).await;
        let token = store.issue(user_id).await.unwrap();

        assert_eq!(store.resolve_active_user(&token).await.unwrap(), user_id);

        let record = db.refresh_token_record(&token).unwrap();
        assert_eq!(record.expires_at - record.created_at, Duration::days(60));
        assert!(record.revoked_at.is_none());
    }

    #[tokio::test]
    async fn test_resolve_does_not_consume() {
        let (store, _db, user_id) = setup(Duration::days(60)).await;
        let token = store.issue(user_id).await.unwrap();

        for _ in 0..3 {
            assert_eq!(store.resolve_active_user(&token).await.unwrap(), user_id);
        }
    }

    #[tokio::test]
    async fn test_revoke_is_idempotent() {
        let (store, db, user_id) = setup(Duration::days(60)).await;
        let token = store.issue(user_id).await.unwrap();

        store.revoke(&token).await.unwrap();
        let revoked_at = db.refresh_token_record(&token).unwrap().revoked_at;
        assert!(revoked_at.is_some());
        assert!(matches!(
            store.resolve_active_user(&token).await,
            Err(AuthError::RefreshTokenNotFound)
        ));

        store.revoke(&token).await.unwrap();
        assert_eq!(db.refresh_token_record(&token).unwrap().revoked_at, revoked_at);
    }

    #[tokio::test]
    async fn test_unknown_and_expired_collapse_to_not_found() {
        let (store, _db, user_id) = setup(Duration::seconds(-1)).await;
        let expired = store.issue(user_id).await.unwrap();

        assert!(matches!(
            store.resolve_active_user(&expired).await,
            Err(AuthError::RefreshTokenNotFound)
        ));
        assert!(matches!(
            store.resolve_active_user("never-issued").await,
            Err(AuthError::RefreshTokenNotFound)
        ));
        // 존재하지 않는 토큰 revoke 도 성공
        store.revoke("never-issued").await.unwrap();
    }

    #[tokio::test]
    async fn test_out_of_range_ttl_is_internal_error() {
        let (store, db, user_id) = setup(Duration::days(365 * 1_000_000)).await;

        assert!(matches!(store.issue(user_id).await, Err(AuthError::Internal(_))));
        assert!(db.refresh_token_record("anything").is_none());
    }

    #[tokio::test]
    async fn test_each_login_gets_independent_token() {
        let (store, _db, user_id) = setup(Duration::days(60)).await;
        let first = store.issue(user_id).await.unwrap();
        let second = store.issue(user_id).await.unwrap();

        store.revoke(&first).await.unwrap();
        assert_eq!(store.resolve_active_user(&second).await.unwrap(), user_id);
    }
}

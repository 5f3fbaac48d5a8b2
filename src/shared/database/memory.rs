// 인메모리 저장소
// In-memory implementation of every repository trait.
// 테스트와 STORAGE=memory 실행에 사용 (PostgreSQL 과 같은 cascade 규칙)

use std::collections::HashMap;
use std::sync::Arc;
use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domains::auth::models::refresh_token::{RefreshToken, RefreshTokenCreate};
use crate::domains::auth::models::user::{User, UserCreate, UserCredentialsUpdate};
use crate::domains::chirp::models::chirp::{Chirp, ChirpCreate};
use crate::shared::database::constraint::UniqueViolation;
use crate::shared::database::repositories::{ChirpRepository, RefreshTokenRepository, UserRepository};

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    chirps: HashMap<Uuid, Chirp>,
    refresh_tokens: HashMap<String, RefreshToken>,
}

/// 인메모리 데이터베이스 (clone 시 같은 테이블 공유)
/// In-memory database; clones share the same tables
#[derive(Clone, Default)]
pub struct MemoryDatabase {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 chirp 개수 (테스트 검증용)
    pub fn chirp_count(&self) -> usize {
        self.tables.read().chirps.len()
    }

    /// 저장된 refresh token 레코드 조회 (테스트 검증용)
    pub fn refresh_token_record(&self, token: &str) -> Option<RefreshToken> {
        self.tables.read().refresh_tokens.get(token).cloned()
    }
}

#[async_trait]
impl UserRepository for MemoryDatabase {
    async fn create_user(&self, data: UserCreate) -> Result<User> {
        let mut tables = self.tables.write();
        if tables.users.values().any(|u| u.email == data.email) {
            return Err(UniqueViolation::new("users_email_key").into());
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: data.email,
            password_hash: data.password_hash,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let tables = self.tables.read();
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.tables.read().users.get(&id).cloned())
    }

    async fn update_credentials(&self, data: UserCredentialsUpdate) -> Result<Option<User>> {
        let mut tables = self.tables.write();
        if tables.users.values().any(|u| u.email == data.email && u.id != data.id) {
            return Err(UniqueViolation::new("users_email_key").into());
        }

        let Some(user) = tables.users.get_mut(&data.id) else {
            return Ok(None);
        };
        user.email = data.email;
        user.password_hash = data.password_hash;
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn delete_all_users(&self) -> Result<u64> {
        let mut tables = self.tables.write();
        let deleted = tables.users.len() as u64;
        tables.users.clear();
        // ON DELETE CASCADE
        tables.chirps.clear();
        tables.refresh_tokens.clear();
        Ok(deleted)
    }
}

#[async_trait]
impl ChirpRepository for MemoryDatabase {
    async fn create_chirp(&self, data: ChirpCreate) -> Result<Chirp> {
        let mut tables = self.tables.write();
        if !tables.users.contains_key(&data.user_id) {
            bail!("insert on table \"chirps\" violates foreign key constraint \"chirps_user_id_fkey\"");
        }

        let now = Utc::now();
        let chirp = Chirp {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            body: data.body,
            user_id: data.user_id,
        };
        tables.chirps.insert(chirp.id, chirp.clone());
        Ok(chirp)
    }

    async fn list_chirps(&self) -> Result<Vec<Chirp>> {
        let mut chirps: Vec<Chirp> = self.tables.read().chirps.values().cloned().collect();
        chirps.sort_by_key(|c| c.created_at);
        Ok(chirps)
    }

    async fn get_chirp(&self, id: Uuid) -> Result<Option<Chirp>> {
        Ok(self.tables.read().chirps.get(&id).cloned())
    }

    async fn delete_chirp(&self, id: Uuid) -> Result<bool> {
        Ok(self.tables.write().chirps.remove(&id).is_some())
    }
}

#[async_trait]
impl RefreshTokenRepository for MemoryDatabase {
    async fn create(&self, data: RefreshTokenCreate) -> Result<RefreshToken> {
        let mut tables = self.tables.write();
        if !tables.users.contains_key(&data.user_id) {
            bail!("insert on table \"refresh_tokens\" violates foreign key constraint \"refresh_tokens_user_id_fkey\"");
        }
        if tables.refresh_tokens.contains_key(&data.token) {
            return Err(UniqueViolation::new("refresh_tokens_pkey").into());
        }

        let record = RefreshToken {
            token: data.token,
            user_id: data.user_id,
            created_at: data.created_at,
            updated_at: data.created_at,
            expires_at: data.expires_at,
            revoked_at: None,
        };
        tables.refresh_tokens.insert(record.token.clone(), record.clone());
        Ok(record)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>> {
        Ok(self.tables.read().refresh_tokens.get(token).cloned())
    }

    async fn revoke(&self, token: &str, revoked_at: DateTime<Utc>) -> Result<bool> {
        let mut tables = self.tables.write();
        match tables.refresh_tokens.get_mut(token) {
            Some(record) if record.revoked_at.is_none() => {
                record.revoked_at = Some(revoked_at);
                record.updated_at = revoked_at;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seed_user(db: &MemoryDatabase) -> User {
        db.create_user(UserCreate {
            email: "walt@example.com".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let db = MemoryDatabase::new();
        seed_user(&db).await;

        let result = db
            .create_user(UserCreate {
                email: "walt@example.com".to_string(),
                password_hash: "x".to_string(),
            })
            .await;
        assert!(UniqueViolation::is_cause_of(&result.unwrap_err()));
    }

    #[tokio::test]
    async fn test_delete_all_users_cascades() {
        let db = MemoryDatabase::new();
        let user = seed_user(&db).await;
        db.create_chirp(ChirpCreate { body: "hello".to_string(), user_id: user.id })
            .await
            .unwrap();
        let now = Utc::now();
        db.create(RefreshTokenCreate {
            token: "t".repeat(64),
            user_id: user.id,
            created_at: now,
            expires_at: now + chrono::Duration::days(1),
        })
        .await
        .unwrap();

        assert_eq!(db.delete_all_users().await.unwrap(), 1);
        assert_eq!(db.chirp_count(), 0);
        assert!(db.refresh_token_record(&"t".repeat(64)).is_none());
    }

    #[tokio::test]
    async fn test_revoke_sets_timestamp_once() {
        let db = MemoryDatabase::new();
        let user = seed_user(&db).await;
        let now = Utc::now();
        let token = "r".repeat(64);
        db.create(RefreshTokenCreate {
            token: token.clone(),
            user_id: user.id,
            created_at: now,
            expires_at: now + chrono::Duration::days(1),
        })
        .await
        .unwrap();

        let first = now + chrono::Duration::seconds(1);
        assert!(db.revoke(&token, first).await.unwrap());
        assert!(!db.revoke(&token, first + chrono::Duration::seconds(5)).await.unwrap());
        assert_eq!(db.refresh_token_record(&token).unwrap().revoked_at, Some(first));

        // 존재하지 않는 토큰도 에러 없이 false
        assert!(!db.revoke("missing", first).await.unwrap());
    }
}

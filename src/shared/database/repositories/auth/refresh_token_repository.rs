use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crate::domains::auth::models::refresh_token::{RefreshToken, RefreshTokenCreate};

/// Refresh Token 저장소 인터페이스
/// Refresh token persistence interface
///
/// 각 호출은 원자적이어야 함 (단일 statement)
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Refresh Token 저장
    /// Store refresh token
    async fn create(&self, data: RefreshTokenCreate) -> Result<RefreshToken>;

    /// 토큰 문자열로 조회 (상태와 무관하게 레코드 반환)
    /// Find refresh token by its value, whatever its state
    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>>;

    /// revoked_at 이 비어 있을 때만 설정. 실제로 변경되었으면 true
    /// Set `revoked_at` only if unset; returns whether a row transitioned
    async fn revoke(&self, token: &str, revoked_at: DateTime<Utc>) -> Result<bool>;
}

/// PostgreSQL Refresh Token 저장소
pub struct PgRefreshTokenRepository {
    pool: PgPool,
}

impl PgRefreshTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn refresh_token_from_row(row: &PgRow) -> RefreshToken {
    RefreshToken {
        token: row.get("token"),
        user_id: row.get("user_id"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        expires_at: row.get("expires_at"),
        revoked_at: row.get("revoked_at"),
    }
}

#[async_trait]
impl RefreshTokenRepository for PgRefreshTokenRepository {
    async fn create(&self, data: RefreshTokenCreate) -> Result<RefreshToken> {
        let row = sqlx::query(
            r#"
            INSERT INTO refresh_tokens (token, user_id, created_at, updated_at, expires_at, revoked_at)
            VALUES ($1, $2, $3, $3, $4, NULL)
            RETURNING token, user_id, created_at, updated_at, expires_at, revoked_at
            "#,
        )
        .bind(&data.token)
        .bind(data.user_id)
        .bind(data.created_at)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create refresh token")?;

        Ok(refresh_token_from_row(&row))
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>> {
        let row = sqlx::query(
            r#"
            SELECT token, user_id, created_at, updated_at, expires_at, revoked_at
            FROM refresh_tokens
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to find refresh token")?;

        Ok(row.as_ref().map(refresh_token_from_row))
    }

    async fn revoke(&self, token: &str, revoked_at: DateTime<Utc>) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE refresh_tokens
            SET revoked_at = $2, updated_at = $2
            WHERE token = $1 AND revoked_at IS NULL
            "#,
        )
        .bind(token)
        .bind(revoked_at)
        .execute(&self.pool)
        .await
        .context("Failed to revoke refresh token")?;

        Ok(result.rows_affected() > 0)
    }
}

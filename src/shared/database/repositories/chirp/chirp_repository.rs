use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;
use crate::domains::chirp::models::chirp::{Chirp, ChirpCreate};

/// Chirp 저장소 인터페이스
/// Chirp persistence interface
#[async_trait]
pub trait ChirpRepository: Send + Sync {
    async fn create_chirp(&self, data: ChirpCreate) -> Result<Chirp>;

    /// 전체 조회 (created_at 오름차순)
    /// All chirps, oldest first
    async fn list_chirps(&self) -> Result<Vec<Chirp>>;

    async fn get_chirp(&self, id: Uuid) -> Result<Option<Chirp>>;

    /// 삭제되었으면 true
    async fn delete_chirp(&self, id: Uuid) -> Result<bool>;
}

/// PostgreSQL Chirp 저장소
pub struct PgChirpRepository {
    pool: PgPool,
}

impl PgChirpRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn chirp_from_row(row: &PgRow) -> Chirp {
    Chirp {
        id: row.get("id"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        body: row.get("body"),
        user_id: row.get("user_id"),
    }
}

#[async_trait]
impl ChirpRepository for PgChirpRepository {
    async fn create_chirp(&self, data: ChirpCreate) -> Result<Chirp> {
        let row = sqlx::query(
            r#"
            INSERT INTO chirps (id, created_at, updated_at, body, user_id)
            VALUES ($1, $2, $2, $3, $4)
            RETURNING id, created_at, updated_at, body, user_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(Utc::now())
        .bind(&data.body)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create chirp")?;

        Ok(chirp_from_row(&row))
    }

    async fn list_chirps(&self) -> Result<Vec<Chirp>> {
        let rows = sqlx::query(
            r#"
            SELECT id, created_at, updated_at, body, user_id
            FROM chirps
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list chirps")?;

        Ok(rows.iter().map(chirp_from_row).collect())
    }

    async fn get_chirp(&self, id: Uuid) -> Result<Option<Chirp>> {
        let row = sqlx::query(
            r#"
            SELECT id, created_at, updated_at, body, user_id
            FROM chirps
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch chirp")?;

        Ok(row.as_ref().map(chirp_from_row))
    }

    async fn delete_chirp(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM chirps WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete chirp")?;

        Ok(result.rows_affected() > 0)
    }
}

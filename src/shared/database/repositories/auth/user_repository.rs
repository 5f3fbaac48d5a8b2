use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;
use crate::domains::auth::models::user::{User, UserCreate, UserCredentialsUpdate};
use crate::shared::database::constraint::UniqueViolation;

const EMAIL_CONSTRAINT: &str = "users_email_key";

/// 이메일 중복은 UniqueViolation 으로, 나머지는 context 를 붙여 반환
fn map_write_error(err: sqlx::Error, context: &'static str) -> anyhow::Error {
    match UniqueViolation::from_sqlx(&err, EMAIL_CONSTRAINT) {
        Some(violation) => violation.into(),
        None => anyhow::Error::new(err).context(context),
    }
}

/// 사용자 저장소 인터페이스
/// User persistence interface
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: UserCreate) -> Result<User>;

    // 이메일로 사용자 조회 (로그인용)
    // Get user by email (for login)
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    // ID로 사용자 조회
    // Get user by ID
    async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>>;

    /// 이메일과 비밀번호 해시 변경, 사용자가 없으면 None
    async fn update_credentials(&self, data: UserCredentialsUpdate) -> Result<Option<User>>;

    /// 모든 사용자 삭제 (chirps, refresh_tokens 는 cascade)
    /// Delete every user, cascading to their chirps and refresh tokens
    async fn delete_all_users(&self) -> Result<u64>;
}

/// PostgreSQL 사용자 저장소
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn user_from_row(row: &PgRow) -> User {
    User {
        id: row.get("id"),
        email: row.get("email"),
        password_hash: row.get("hashed_password"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create_user(&self, data: UserCreate) -> Result<User> {
        let now = Utc::now();
        let row = sqlx::query(
            r#"
            INSERT INTO users (id, email, hashed_password, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING id, email, hashed_password, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create user"))?;

        Ok(user_from_row(&row))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, email, hashed_password, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user by email")?;

        Ok(row.as_ref().map(user_from_row))
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, email, hashed_password, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user by id")?;

        Ok(row.as_ref().map(user_from_row))
    }

    async fn update_credentials(&self, data: UserCredentialsUpdate) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            UPDATE users
            SET email = $1, hashed_password = $2, updated_at = $3
            WHERE id = $4
            RETURNING id, email, hashed_password, created_at, updated_at
            "#,
        )
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(Utc::now())
        .bind(data.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to update user credentials"))?;

        Ok(row.as_ref().map(user_from_row))
    }

    async fn delete_all_users(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await
            .context("Failed to delete users")?;

        Ok(result.rows_affected())
    }
}

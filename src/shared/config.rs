// 애플리케이션 설정 (환경 변수 / .env)
// Application configuration loaded once at process start

use anyhow::{bail, Context, Result};
use chrono::{Duration, Utc};

/// 기본 비속어 목록
pub const DEFAULT_PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// 저장소 종류
/// Persistence backend
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    /// PostgreSQL (연결 문자열)
    Postgres { database_url: String },
    /// 프로세스 메모리 (개발/테스트용)
    Memory,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub storage: StorageBackend,
    pub jwt_secret: String,
    pub platform: String,
    pub bind_addr: String,
    pub filepath_root: String,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
    pub profane_words: Vec<String>,
}

impl Config {
    /// 환경 변수에서 설정 로드
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 임의의 key-value 소스에서 설정 로드
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage = match lookup("STORAGE").as_deref().unwrap_or("postgres") {
            "postgres" => StorageBackend::Postgres {
                database_url: lookup("DB_URL").context("DB_URL is required")?,
            },
            "memory" => StorageBackend::Memory,
            other => bail!("unknown STORAGE backend: {other}"),
        };

        let jwt_secret = lookup("JWT_SECRET").context("JWT_SECRET is required")?;
        if jwt_secret.is_empty() {
            bail!("JWT_SECRET must not be empty");
        }

        let access_token_ttl = lifetime(
            "ACCESS_TOKEN_TTL_SECONDS",
            parse_or(&lookup, "ACCESS_TOKEN_TTL_SECONDS", 3600)?,
            Duration::try_seconds,
        )?;
        let refresh_token_ttl = lifetime(
            "REFRESH_TOKEN_TTL_HOURS",
            parse_or(&lookup, "REFRESH_TOKEN_TTL_HOURS", 1440)?,
            Duration::try_hours,
        )?;

        let profane_words = match lookup("PROFANE_WORDS") {
            Some(words) => words
                .split(',')
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
            None => DEFAULT_PROFANE_WORDS.iter().map(|w| w.to_string()).collect(),
        };

        Ok(Self {
            storage,
            jwt_secret,
            platform: lookup("PLATFORM").unwrap_or_else(|| "prod".to_string()),
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:8081".to_string()),
            filepath_root: lookup("FILEPATH_ROOT").unwrap_or_else(|| ".".to_string()),
            access_token_ttl,
            refresh_token_ttl,
            profane_words,
        })
    }

    /// dev 환경 여부 (admin reset 허용)
    pub fn is_dev(&self) -> bool {
        self.platform == "dev"
    }
}

/// 토큰 수명: 양수이고, 현재 시각에 더해도 표현 가능한 범위여야 함
fn lifetime(key: &str, amount: i64, to_duration: fn(i64) -> Option<Duration>) -> Result<Duration> {
    if amount <= 0 {
        bail!("{key} must be positive, got {amount}");
    }
    let ttl = to_duration(amount).with_context(|| format!("{key} is out of range: {amount}"))?;
    if Utc::now().checked_add_signed(ttl).is_none() {
        bail!("{key} is out of range: {amount}");
    }
    Ok(ttl)
}

fn parse_or<F>(lookup: &F, key: &str, default: i64) -> Result<i64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("{key} must be an integer, got {raw:?}")),
        None => Ok(default),
    }
}

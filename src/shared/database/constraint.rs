// 제약 조건 위반 에러 (저장소 구현 공통)

/// 유니크 제약 위반 (이메일 중복, 토큰 중복)
/// Unique constraint violation reported by any repository implementation
#[derive(Debug, thiserror::Error)]
#[error("duplicate key value violates unique constraint \"{constraint}\"")]
pub struct UniqueViolation {
    pub constraint: String,
}

impl UniqueViolation {
    pub fn new(constraint: &str) -> Self {
        Self {
            constraint: constraint.to_string(),
        }
    }

    /// PostgreSQL unique_violation (SQLSTATE 23505) 이면 변환
    pub fn from_sqlx(err: &sqlx::Error, constraint: &str) -> Option<Self> {
        let db_err = err.as_database_error()?;
        if db_err.code().as_deref() == Some("23505") {
            Some(Self::new(constraint))
        } else {
            None
        }
    }

    /// anyhow 에러 체인에 유니크 제약 위반이 있는지 확인
    pub fn is_cause_of(err: &anyhow::Error) -> bool {
        err.downcast_ref::<Self>().is_some()
    }
}

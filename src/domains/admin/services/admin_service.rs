use std::sync::Arc;
use crate::domains::admin::services::ApiMetrics;
use crate::shared::database::UserRepository;
use crate::shared::errors::AdminError;

// 관리자 서비스 (metrics 조회, dev 환경 초기화)
#[derive(Clone)]
pub struct AdminService {
    users: Arc<dyn UserRepository>,
    metrics: Arc<ApiMetrics>,
    allow_reset: bool,
}

impl AdminService {
    pub fn new(users: Arc<dyn UserRepository>, metrics: Arc<ApiMetrics>, allow_reset: bool) -> Self {
        Self {
            users,
            metrics,
            allow_reset,
        }
    }

    pub fn fileserver_hits(&self) -> u64 {
        self.metrics.fileserver_hits()
    }

    /// 카운터 초기화 + 전체 사용자 삭제 (dev 전용)
    /// Reset counters and delete every user; dev platform only
    pub async fn reset(&self) -> Result<(), AdminError> {
        if !self.allow_reset {
            return Err(AdminError::ResetNotAllowed);
        }

        let deleted = self
            .users
            .delete_all_users()
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to delete users: {:#}", e)))?;
        let hits = self.metrics.reset();

        tracing::warn!(deleted_users = deleted, previous_hits = hits, "application state reset");
        Ok(())
    }
}

use std::sync::Arc;
use crate::shared::config::Config;
use crate::shared::database::{
    ChirpRepository, Database, MemoryDatabase, PgChirpRepository, PgRefreshTokenRepository,
    PgUserRepository, RefreshTokenRepository, UserRepository,
};
use crate::domains::auth::services::state::AuthState;
use crate::domains::chirp::services::state::ChirpState;
use crate::domains::admin::services::{AdminService, ApiMetrics};

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 각 도메인의 State 와 요청 카운터를 보관. 전역 변수 없음
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub auth_state: AuthState,
    pub chirp_state: ChirpState,
    pub admin_service: AdminService,
    /// 정적 파일 요청 카운터
    /// File server hit counter
    pub metrics: Arc<ApiMetrics>,
}

impl AppState {
    /// 저장소 구현을 받아 모든 도메인 State 를 초기화하고 조합
    pub fn new(
        config: Config,
        users: Arc<dyn UserRepository>,
        chirps: Arc<dyn ChirpRepository>,
        refresh_tokens: Arc<dyn RefreshTokenRepository>,
    ) -> Self {
        let metrics = Arc::new(ApiMetrics::new());

        // 1. 각 도메인 State 생성
        let auth_state = AuthState::new(&config, users.clone(), refresh_tokens);
        let chirp_state = ChirpState::new(&config, chirps);
        let admin_service = AdminService::new(users, metrics.clone(), config.is_dev());

        // 2. AppState 조합
        Self {
            config: Arc::new(config),
            auth_state,
            chirp_state,
            admin_service,
            metrics,
        }
    }

    /// Create AppState backed by PostgreSQL
    pub fn from_database(config: Config, db: &Database) -> Self {
        let pool = db.pool().clone();
        Self::new(
            config,
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgChirpRepository::new(pool.clone())),
            Arc::new(PgRefreshTokenRepository::new(pool)),
        )
    }

    /// Create AppState backed by the in-memory store
    pub fn from_memory(config: Config, db: MemoryDatabase) -> Self {
        let store = Arc::new(db);
        Self::new(config, store.clone(), store.clone(), store)
    }
}

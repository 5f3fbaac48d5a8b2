// Auth domain state
// 인증 도메인 상태
use std::sync::Arc;
use crate::shared::config::Config;
use crate::shared::database::{RefreshTokenRepository, UserRepository};
use crate::domains::auth::services::{AuthService, JwtService, PasswordService, RefreshTokenStore};

/// Auth domain state
/// 인증 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct AuthState {
    pub auth_service: AuthService,
    pub jwt_service: JwtService,
}

impl AuthState {
    /// Create AuthState with repositories and configuration
    /// AuthState 생성 (저장소와 설정 필요)
    pub fn new(
        config: &Config,
        users: Arc<dyn UserRepository>,
        refresh_tokens: Arc<dyn RefreshTokenRepository>,
    ) -> Self {
        let jwt_service = JwtService::new(&config.jwt_secret, config.access_token_ttl);
        let refresh_token_store = RefreshTokenStore::new(refresh_tokens, config.refresh_token_ttl);

        Self {
            auth_service: AuthService::new(
                users,
                PasswordService::new(),
                jwt_service.clone(),
                refresh_token_store,
            ),
            jwt_service,
        }
    }
}

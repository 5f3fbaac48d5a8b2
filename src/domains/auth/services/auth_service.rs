use std::sync::Arc;
use crate::shared::database::{UniqueViolation, UserRepository};
use crate::domains::auth::models::{User, UserCreate, UserCredentialsUpdate, SignupRequest, SigninRequest, UpdateCredentialsRequest};
use crate::domains::auth::services::{JwtService, PasswordService, RefreshTokenStore};
use crate::shared::errors::AuthError;
use uuid::Uuid;

/// 로그인 결과 (사용자 + 두 토큰)
/// Result of a successful login
#[derive(Debug)]
pub struct SigninResult {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

// 인증 서비스
// AuthService: handles authentication business logic
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    password_service: PasswordService,
    jwt_service: JwtService,
    refresh_tokens: RefreshTokenStore,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        password_service: PasswordService,
        jwt_service: JwtService,
        refresh_tokens: RefreshTokenStore,
    ) -> Self {
        Self {
            users,
            password_service,
            jwt_service,
            refresh_tokens,
        }
    }

    // 회원가입 (비즈니스 로직)
    pub async fn signup(&self, request: SignupRequest) -> Result<User, AuthError> {
        // 1. 이메일 중복 확인
        let existing_user = self
            .users
            .get_user_by_email(&request.email)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to check email existence: {:#}", e)))?;

        if existing_user.is_some() {
            return Err(AuthError::EmailAlreadyExists { email: request.email });
        }

        // 2. 비밀번호 해싱
        let password_hash = self.password_service.hash_password_blocking(request.password).await?;

        // 3. 사용자 생성 (동시 가입으로 인한 중복도 EmailAlreadyExists)
        let email = request.email;
        let user = self
            .users
            .create_user(UserCreate {
                email: email.clone(),
                password_hash,
            })
            .await
            .map_err(|e| user_write_error(e, email, "Failed to create user"))?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    // 로그인 (비즈니스 로직)
    // 로그인마다 독립적인 Refresh Token 발급 (기존 세션은 유지)
    pub async fn signin(&self, request: SigninRequest) -> Result<SigninResult, AuthError> {
        // 1. 이메일로 사용자 조회
        let user = self
            .users
            .get_user_by_email(&request.email)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to fetch user: {:#}", e)))?
            .ok_or(AuthError::InvalidCredentials)?;

        // 2. 비밀번호 검증
        self.password_service
            .verify_password_blocking(request.password, user.password_hash.clone())
            .await?;

        // 3. Access Token 발급
        let access_token = self.jwt_service.generate_access_token(user.id)?;

        // 4. 새 Refresh Token 생성 및 저장
        let refresh_token = self.refresh_tokens.issue(user.id).await?;

        tracing::info!(user_id = %user.id, "user signed in");
        Ok(SigninResult {
            user,
            access_token,
            refresh_token,
        })
    }

    /// Refresh Token 검증 및 새 Access Token 발급
    /// Verify refresh token and issue new access token
    ///
    /// Refresh Token 은 소비되지 않음 (rotation 없음)
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, AuthError> {
        let user_id = self.refresh_tokens.resolve_active_user(refresh_token).await?;
        let access_token = self.jwt_service.generate_access_token(user_id)?;
        Ok(access_token)
    }

    /// 로그아웃 - Refresh Token 무효화
    /// Logout - Revoke refresh token
    pub async fn logout(&self, refresh_token: &str) -> Result<(), AuthError> {
        self.refresh_tokens.revoke(refresh_token).await
    }

    /// 이메일/비밀번호 변경
    /// Update the caller's own email and password
    ///
    /// 대상은 항상 토큰의 사용자 자신 (다른 사용자를 지정하는 입력 없음)
    pub async fn update_credentials(
        &self,
        identity: Uuid,
        request: UpdateCredentialsRequest,
    ) -> Result<User, AuthError> {
        // 1. 대상 사용자 조회
        let user = self
            .users
            .get_user_by_id(identity)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to fetch user: {:#}", e)))?
            .ok_or(AuthError::UserNotFound { id: identity })?;

        // 2. 새 이메일이 다른 사용자와 겹치는지 확인
        let owner_of_email = self
            .users
            .get_user_by_email(&request.email)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to check email existence: {:#}", e)))?;
        if owner_of_email.is_some_and(|other| other.id != user.id) {
            return Err(AuthError::EmailAlreadyExists { email: request.email });
        }

        // 3. 비밀번호 해싱 후 저장
        let password_hash = self.password_service.hash_password_blocking(request.password).await?;
        let email = request.email;
        let updated = self
            .users
            .update_credentials(UserCredentialsUpdate {
                id: user.id,
                email: email.clone(),
                password_hash,
            })
            .await
            .map_err(|e| user_write_error(e, email, "Failed to update user"))?
            .ok_or(AuthError::UserNotFound { id: user.id })?;

        tracing::info!(user_id = %updated.id, "user credentials updated");
        Ok(updated)
    }

    /// Access Token 으로 사용자 ID 확인 (extractor 에서 사용)
    pub fn authenticate(&self, access_token: &str) -> Result<Uuid, AuthError> {
        Ok(self.jwt_service.validate_access_token(access_token)?)
    }
}

/// 이메일 유니크 제약 위반은 400, 나머지 저장 실패는 500
fn user_write_error(err: anyhow::Error, email: String, action: &str) -> AuthError {
    if UniqueViolation::is_cause_of(&err) {
        AuthError::EmailAlreadyExists { email }
    } else {
        AuthError::DatabaseError(format!("{}: {:#}", action, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::database::MemoryDatabase;
    use async_trait::async_trait;
    use chrono::Duration;

    /// 이메일 조회가 항상 비어 있는 저장소 (중복 확인과 삽입 사이의 경쟁 재현)
    struct StaleEmailLookup(MemoryDatabase);

    #[async_trait]
    impl UserRepository for StaleEmailLookup {
        async fn create_user(&self, data: UserCreate) -> anyhow::Result<User> {
            self.0.create_user(data).await
        }

        async fn get_user_by_email(&self, _email: &str) -> anyhow::Result<Option<User>> {
            Ok(None)
        }

        async fn get_user_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
            self.0.get_user_by_id(id).await
        }

        async fn update_credentials(&self, data: UserCredentialsUpdate) -> anyhow::Result<Option<User>> {
            self.0.update_credentials(data).await
        }

        async fn delete_all_users(&self) -> anyhow::Result<u64> {
            self.0.delete_all_users().await
        }
    }

    fn service(db: &MemoryDatabase) -> AuthService {
        AuthService::new(
            Arc::new(db.clone()),
            PasswordService::new(),
            JwtService::new("walrider", Duration::hours(1)),
            RefreshTokenStore::new(Arc::new(db.clone()), Duration::days(60)),
        )
    }

    fn signup(email: &str, password: &str) -> SignupRequest {
        SignupRequest { email: email.to_string(), password: password.to_string() }
    }

    fn signin(email: &str, password: &str) -> SigninRequest {
        SigninRequest { email: email.to_string(), password: password.to_string() }
    }

    #[tokio::test]
    async fn test_signup_then_signin() {
        let db = MemoryDatabase::new();
        let auth = service(&db);
        let user = auth.signup(signup("walt@example.com", "04234")).await.unwrap();
        assert_ne!(user.password_hash, "04234");

        let result = auth.signin(signin("walt@example.com", "04234")).await.unwrap();
        assert_eq!(result.user.id, user.id);
        assert_eq!(auth.authenticate(&result.access_token).unwrap(), user.id);

        let fresh = auth.refresh_access_token(&result.refresh_token).await.unwrap();
        assert_eq!(auth.authenticate(&fresh).unwrap(), user.id);
    }

    #[tokio::test]
    async fn test_duplicate_signup_rejected() {
        let db = MemoryDatabase::new();
        let auth = service(&db);
        auth.signup(signup("walt@example.com", "04234")).await.unwrap();

        let err = auth.signup(signup("walt@example.com", "other")).await.unwrap_err();
        assert!(matches!(err, AuthError::EmailAlreadyExists { .. }));
    }

    #[tokio::test]
    async fn test_signin_failures_are_indistinguishable() {
        let db = MemoryDatabase::new();
        let auth = service(&db);
        auth.signup(signup("walt@example.com", "04234")).await.unwrap();

        let wrong_password = auth.signin(signin("walt@example.com", "wrong")).await.unwrap_err();
        let unknown_email = auth.signin(signin("jesse@example.com", "04234")).await.unwrap_err();
        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_logout_blocks_refresh() {
        let db = MemoryDatabase::new();
        let auth = service(&db);
        auth.signup(signup("walt@example.com", "04234")).await.unwrap();
        let result = auth.signin(signin("walt@example.com", "04234")).await.unwrap();

        auth.logout(&result.refresh_token).await.unwrap();
        assert!(matches!(
            auth.refresh_access_token(&result.refresh_token).await,
            Err(AuthError::RefreshTokenNotFound)
        ));
        auth.logout(&result.refresh_token).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_credentials() {
        let db = MemoryDatabase::new();
        let auth = service(&db);
        let user = auth.signup(signup("walt@example.com", "04234")).await.unwrap();

        let updated = auth
            .update_credentials(
                user.id,
                UpdateCredentialsRequest { email: "heisenberg@example.com".to_string(), password: "losPollos".to_string() },
            )
            .await
            .unwrap();
        assert_eq!(updated.email, "heisenberg@example.com");

        assert!(auth.signin(signin("heisenberg@example.com", "losPollos")).await.is_ok());
        assert!(matches!(
            auth.signin(signin("walt@example.com", "04234")).await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_update_to_taken_email_rejected() {
        let db = MemoryDatabase::new();
        let auth = service(&db);
        let walt = auth.signup(signup("walt@example.com", "04234")).await.unwrap();
        auth.signup(signup("jesse@example.com", "yo")).await.unwrap();

        let err = auth
            .update_credentials(
                walt.id,
                UpdateCredentialsRequest { email: "jesse@example.com".to_string(), password: "x".to_string() },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailAlreadyExists { .. }));
    }

    #[tokio::test]
    async fn test_racing_duplicate_writes_are_email_conflicts() {
        let db = MemoryDatabase::new();
        let auth = AuthService::new(
            Arc::new(StaleEmailLookup(db.clone())),
            PasswordService::new(),
            JwtService::new("walrider", Duration::hours(1)),
            RefreshTokenStore::new(Arc::new(db.clone()), Duration::days(60)),
        );

        auth.signup(signup("walt@example.com", "04234")).await.unwrap();
        let err = auth.signup(signup("walt@example.com", "other")).await.unwrap_err();
        assert!(matches!(err, AuthError::EmailAlreadyExists { .. }));

        let jesse = auth.signup(signup("jesse@example.com", "yo")).await.unwrap();
        let err = auth
            .update_credentials(
                jesse.id,
                UpdateCredentialsRequest { email: "walt@example.com".to_string(), password: "x".to_string() },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailAlreadyExists { .. }));
    }

    #[tokio::test]
    async fn test_update_credentials_only_touches_caller() {
        let db = MemoryDatabase::new();
        let auth = service(&db);
        let walt = auth.signup(signup("walt@example.com", "04234")).await.unwrap();
        let jesse = auth.signup(signup("jesse@example.com", "yo")).await.unwrap();

        auth.update_credentials(
            walt.id,
            UpdateCredentialsRequest { email: "heisenberg@example.com".to_string(), password: "blue".to_string() },
        )
        .await
        .unwrap();

        let untouched = db.get_user_by_id(jesse.id).await.unwrap().unwrap();
        assert_eq!(untouched.email, "jesse@example.com");
        assert_eq!(untouched.password_hash, jesse.password_hash);
        assert!(auth.signin(signin("jesse@example.com", "yo")).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_credentials_for_deleted_user() {
        let db = MemoryDatabase::new();
        let auth = service(&db);
        let walt = auth.signup(signup("walt@example.com", "04234")).await.unwrap();
        db.delete_all_users().await.unwrap();

        let err = auth
            .update_credentials(
                walt.id,
                UpdateCredentialsRequest { email: "x@example.com".to_string(), password: "x".to_string() },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UserNotFound { .. }));
    }
}

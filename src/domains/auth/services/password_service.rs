use crate::shared::errors::AuthError;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use argon2::password_hash::{rand_core::OsRng, SaltString};

/// 비밀번호 해싱 서비스 (Argon2id)
/// Password hashing service
///
/// 해시 결과는 PHC 문자열로 알고리즘, 파라미터, salt 를 모두 포함한다.
#[derive(Clone, Default)]
pub struct PasswordService {
    argon2: Argon2<'static>,
}

impl PasswordService {
    pub fn new() -> Self {
        Self::default()
    }

    /// 비밀번호 해싱
    /// Hash password
    pub fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::PasswordHashingFailed(format!("Failed to hash password: {}", e)))?
            .to_string();

        Ok(password_hash)
    }

    /// 비밀번호 검증
    /// Verify password against a stored hash
    ///
    /// 불일치는 항상 `InvalidCredentials` (이유는 노출하지 않음).
    /// 저장된 해시를 해석할 수 없으면 내부 에러.
    pub fn verify_password(&self, password: &str, password_hash: &str) -> Result<(), AuthError> {
        let parsed_hash = PasswordHash::new(password_hash)
            .map_err(|e| AuthError::PasswordVerificationFailed(format!("Invalid password hash: {}", e)))?;

        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;

        Ok(())
    }

    /// 해싱을 blocking 스레드 풀에서 실행 (async worker 를 막지 않음)
    /// Hash on tokio's blocking pool
    pub async fn hash_password_blocking(&self, password: String) -> Result<String, AuthError> {
        let service = self.clone();
        tokio::task::spawn_blocking(move || service.hash_password(&password))
            .await
            .map_err(|e| AuthError::Internal(format!("Password hashing task failed: {}", e)))?
    }

    /// 검증을 blocking 스레드 풀에서 실행
    /// Verify on tokio's blocking pool
    pub async fn verify_password_blocking(&self, password: String, password_hash: String) -> Result<(), AuthError> {
        let service = self.clone();
        tokio::task::spawn_blocking(move || service.verify_password(&password, &password_hash))
            .await
            .map_err(|e| AuthError::Internal(format!("Password verification task failed: {}", e)))?
    }
}

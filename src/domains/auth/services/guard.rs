use crate::shared::errors::AuthError;
use uuid::Uuid;

/// 소유권 검증 (인가)
/// Ownership check gating destructive or identity-scoped mutations
///
/// 반드시 Access Token 검증으로 identity 를 얻은 뒤, 변경 쿼리 전에 호출.
pub fn authorize(identity: Uuid, owner: Uuid) -> Result<(), AuthError> {
    if identity != owner {
        return Err(AuthError::Forbidden);
    }
    Ok(())
}

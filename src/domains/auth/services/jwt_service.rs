// src/domains/auth/services/jwt_service.rs
use std::sync::Arc;
use crate::shared::errors::TokenError;
use crate::domains::auth::models::jwt::{Claims, ACCESS_TOKEN_ISSUER};
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

/// 서명/검증 기능 인터페이스
/// Narrow sign/verify capability used by [`JwtService`]
///
/// 구현체는 서명과 구조만 책임지고, 시간/issuer 정책은 JwtService 가 적용한다.
pub trait TokenSigner: Send + Sync {
    /// 사용하는 서명 알고리즘
    fn algorithm(&self) -> Algorithm;

    /// Claims 를 compact JWS (header.payload.signature) 로 서명
    fn sign(&self, claims: &Claims) -> Result<String, TokenError>;

    /// 서명을 검증한 뒤에만 Claims 를 디코딩
    fn verify(&self, token: &str) -> Result<Claims, TokenError>;
}

/// HMAC 기반 서명 (대칭 키)
/// HMAC signer over a symmetric secret
pub struct HmacSigner {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl HmacSigner {
    /// HS256 서명 생성
    pub fn hs256(secret: &[u8]) -> Self {
        Self {
            algorithm: Algorithm::HS256,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }
}

impl TokenSigner for HmacSigner {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(self.algorithm), claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(format!("Failed to generate access token: {}", e)))
    }

    fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // 시간 검증은 JwtService::validate_access_token 에서 leeway 없이 수행
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::BadSignature,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::ImmatureSignature => TokenError::NotYetValid,
                _ => TokenError::Malformed,
            })?;

        Ok(token_data.claims)
    }
}

/// JWT 서비스 (Access Token 발급/검증, 상태 없음)
/// Access token codec: stateless creation and validation of signed identity tokens
#[derive(Clone)]
pub struct JwtService {
    signer: Arc<dyn TokenSigner>,
    access_token_ttl: Duration,
}

impl JwtService {
    /// HS256 JWT Service 생성
    /// Create JWT Service signing with HS256
    pub fn new(secret: &str, access_token_ttl: Duration) -> Self {
        Self::with_signer(Arc::new(HmacSigner::hs256(secret.as_bytes())), access_token_ttl)
    }

    /// 다른 서명 구현체로 생성
    pub fn with_signer(signer: Arc<dyn TokenSigner>, access_token_ttl: Duration) -> Self {
        Self {
            signer,
            access_token_ttl,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.signer.algorithm()
    }

    /// Access Token 발급 (기본 수명)
    /// Generate Access Token with the configured lifetime
    pub fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.generate_access_token_with_ttl(user_id, self.access_token_ttl)
    }

    /// Access Token 발급 (수명 지정, 음수면 이미 만료된 토큰)
    pub fn generate_access_token_with_ttl(&self, user_id: Uuid, ttl: Duration) -> Result<String, TokenError> {
        let claims = Claims::new(user_id, Utc::now(), ttl)
            .ok_or_else(|| TokenError::Signing(format!("Access token lifetime out of range: {}", ttl)))?;
        self.signer.sign(&claims)
    }

    /// Access Token 검증 후 사용자 ID 반환
    /// Verify Access Token and return its subject
    ///
    /// 1. 구조 + 서명 검증 (TokenSigner)
    /// 2. issuer 확인
    /// 3. 만료(now >= exp) / 사용 전(now < nbf) 확인
    /// 4. subject 를 UUID 로 파싱
    pub fn validate_access_token(&self, token: &str) -> Result<Uuid, TokenError> {
        let claims = self.signer.verify(token)?;

        if claims.iss != ACCESS_TOKEN_ISSUER {
            return Err(TokenError::Malformed);
        }

        let now = Utc::now().timestamp();
        if now >= claims.exp {
            return Err(TokenError::Expired);
        }
        if now < claims.nbf {
            return Err(TokenError::NotYetValid);
        }

        Uuid::parse_str(&claims.sub).map_err(|_| TokenError::Malformed)
    }
}

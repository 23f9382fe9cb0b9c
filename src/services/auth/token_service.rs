//! JWT 토큰 관리 서비스 구현
//!
//! HS256 서명 기반 JSON Web Token 의 발급과 검증을 담당합니다.
//! 액세스/리프레시 토큰 모두 같은 서명 키, audience, issuer 를 사용하며
//! 만료 시간만 다릅니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use log::debug;
use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::domain::models::token::{ExtraClaims, TokenClaims};

/// 토큰 발급/검증 추상화
pub trait TokenService: Send + Sync {
    /// 주체(`sub`)와 만료 시간(초)으로 서명된 토큰 생성
    fn sign(&self, subject: &str, ttl_seconds: i64, extra: ExtraClaims) -> Result<String, AppError>;

    /// 서명, audience, issuer, 만료를 검증하고 클레임 반환
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 모든 검증 실패
    fn verify(&self, token: &str) -> Result<TokenClaims, AppError>;

    /// 액세스 토큰 유효 시간 (초)
    fn access_ttl(&self) -> i64;

    /// 리프레시 토큰 유효 시간 (초)
    fn refresh_ttl(&self) -> i64;
}

/// HMAC-SHA256 JWT 구현체
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "aud", "iss"]);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            config,
        }
    }
}

impl TokenService for JwtTokenService {
    fn sign(&self, subject: &str, ttl_seconds: i64, extra: ExtraClaims) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(ttl_seconds);

        let claims = TokenClaims {
            sub: subject.to_string(),
            email: extra.email,
            aud: self.config.audience.clone(),
            iss: self.config.issuer.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                let reason = match e.kind() {
                    ErrorKind::ExpiredSignature => "토큰이 만료되었습니다",
                    ErrorKind::InvalidAudience => "audience 불일치",
                    ErrorKind::InvalidIssuer => "issuer 불일치",
                    ErrorKind::InvalidSignature => "서명 불일치",
                    _ => "유효하지 않은 토큰입니다",
                };
                debug!("토큰 검증 실패: {} ({})", reason, e);
                AppError::AuthenticationError("Invalid token".to_string())
            })
    }

    fn access_ttl(&self) -> i64 {
        self.config.ttl_seconds
    }

    fn refresh_ttl(&self) -> i64 {
        self.config.refresh_ttl_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            audience: "http://localhost:8080".to_string(),
            issuer: "http://localhost:8080".to_string(),
            ttl_seconds: 3600,
            refresh_ttl_seconds: 86400,
        }
    }

    #[test]
    fn test_sign_and_verify() {
        let service = JwtTokenService::new(config());

        let token = service
            .sign("person-id", service.access_ttl(), ExtraClaims::with_email("a@mail.com"))
            .unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, "person-id");
        assert_eq!(claims.email.as_deref(), Some("a@mail.com"));
        assert_eq!(claims.aud, "http://localhost:8080");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = JwtTokenService::new(config());

        let token = service.sign("person-id", -10, ExtraClaims::default()).unwrap();
        assert!(matches!(service.verify(&token), Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_wrong_secret_audience_or_issuer_is_rejected() {
        let service = JwtTokenService::new(config());
        let token = service.sign("person-id", 60, ExtraClaims::default()).unwrap();

        let other_secret = JwtTokenService::new(JwtConfig { secret: "other".to_string(), ..config() });
        assert!(other_secret.verify(&token).is_err());

        let other_audience = JwtTokenService::new(JwtConfig { audience: "other".to_string(), ..config() });
        assert!(other_audience.verify(&token).is_err());

        let other_issuer = JwtTokenService::new(JwtConfig { issuer: "other".to_string(), ..config() });
        assert!(other_issuer.verify(&token).is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        let service = JwtTokenService::new(config());
        assert!(matches!(service.verify("not.a.jwt"), Err(AppError::AuthenticationError(_))));
        assert!(matches!(service.verify(""), Err(AppError::AuthenticationError(_))));
    }
}

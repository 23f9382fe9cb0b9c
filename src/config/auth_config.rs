//! # Authentication Configuration Module
//!
//! JWT 액세스/리프레시 토큰 발급과 검증에 필요한 설정을 관리합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_TOKEN_AUDIENCE="http://localhost:8080"
//! export JWT_TOKEN_ISSUER="http://localhost:8080"
//! export JWT_TTL="3600"            # 액세스 토큰 (초)
//! export JWT_REFRESH_TTL="86400"   # 리프레시 토큰 (초)
//! ```

use std::env;
use super::env_or;

/// JWT 서명/검증 설정
///
/// 액세스 토큰과 리프레시 토큰은 같은 비밀키, audience, issuer 를 공유하고
/// 만료 시간만 서로 다르게 설정됩니다.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC 서명 비밀키
    pub secret: String,
    /// `aud` 클레임
    pub audience: String,
    /// `iss` 클레임
    pub issuer: String,
    /// 액세스 토큰 유효 시간 (초)
    pub ttl_seconds: i64,
    /// 리프레시 토큰 유효 시간 (초)
    pub refresh_ttl_seconds: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: Self::secret(),
            audience: Self::audience(),
            issuer: Self::issuer(),
            ttl_seconds: Self::ttl_seconds(),
            refresh_ttl_seconds: Self::refresh_ttl_seconds(),
        }
    }

    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    pub fn audience() -> String {
        env::var("JWT_TOKEN_AUDIENCE")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
    }

    pub fn issuer() -> String {
        env::var("JWT_TOKEN_ISSUER")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
    }

    pub fn ttl_seconds() -> i64 {
        env_or("JWT_TTL", 3600)
    }

    pub fn refresh_ttl_seconds() -> i64 {
        env_or("JWT_REFRESH_TTL", 86400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_defaults() {
        if env::var("JWT_TTL").is_err() {
            assert_eq!(JwtConfig::ttl_seconds(), 3600);
        }

        if env::var("JWT_REFRESH_TTL").is_err() {
            assert_eq!(JwtConfig::refresh_ttl_seconds(), 86400);
        }
    }

    #[test]
    fn test_refresh_outlives_access_by_default() {
        if env::var("JWT_TTL").is_err() && env::var("JWT_REFRESH_TTL").is_err() {
            let config = JwtConfig::from_env();
            assert!(config.refresh_ttl_seconds > config.ttl_seconds);
        }
    }
}

//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 관심사별 구조체로 묶어 중앙에서 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 저장소, 업로드, bcrypt 관련 설정
//! - [`auth_config`] - JWT 서명/검증 관련 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # JWT 설정 (TTL 단위: 초)
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_TOKEN_AUDIENCE="http://localhost:8080"
//! export JWT_TOKEN_ISSUER="http://localhost:8080"
//! export JWT_TTL="3600"
//! export JWT_REFRESH_TTL="86400"
//!
//! # 저장소 설정
//! export STORAGE_BACKEND="mongodb"   # mongodb, memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="persons_messages"
//!
//! # 프로필 사진 저장 위치
//! export PICTURES_DIR="pictures"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{JwtConfig, ServerConfig};
//!
//! let jwt = JwtConfig::from_env();
//! println!("Server will bind to {}:{}", ServerConfig::host(), ServerConfig::port());
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use std::env;

/// 환경 변수를 읽어 파싱하고, 없거나 파싱에 실패하면 기본값을 사용합니다.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("{} 값 '{}' 파싱 실패, 기본값 사용", key, raw);
            default
        }),
        Err(_) => default,
    }
}

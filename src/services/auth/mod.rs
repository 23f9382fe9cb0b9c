//! 인증/보안 서비스 모듈
//!
//! - [`HashingService`] / [`BcryptHashingService`] - 비밀번호 해싱
//! - [`TokenService`] / [`JwtTokenService`] - JWT 발급/검증
//! - [`AuthService`] - 로그인, 토큰 갱신
//! - [`AuthGuard`] - 요청 단위 인증

pub mod hashing_service;
pub mod token_service;
pub mod auth_service;
pub mod auth_guard;

pub use hashing_service::{BcryptHashingService, HashingService};
pub use token_service::{JwtTokenService, TokenService};
pub use auth_service::AuthService;
pub use auth_guard::{extract_bearer_token, AuthGuard};

//! HTTP 미들웨어 모듈
//!
//! - [`AuthMiddleware`] - Bearer 토큰 인증 (필수/선택 모드)

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;

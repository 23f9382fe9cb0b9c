//! 인증 도메인 모델
//!
//! 인증 가드가 요청에 부착하는 [`AuthContext`] 와 가드의 동작 모드를 정의합니다.

pub mod auth_context;
pub mod authentication_request;

pub use auth_context::{AuthContext, OptionalAuth};
pub use authentication_request::AuthMode;

//! # Domain Models
//!
//! 저장되지 않고 요청 처리 중에만 존재하는 값들입니다.
//!
//! - [`token`] - JWT 클레임, 토큰 쌍
//! - [`auth`] - 요청에 부착되는 인증 정보, 인증 모드

pub mod token;
pub mod auth;

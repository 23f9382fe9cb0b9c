//! # Domain Layer
//!
//! - [`entities`] - 영속 엔티티 (`Person`, `Message`)
//! - [`dto`] - API 요청/응답 객체
//! - [`models`] - 토큰 클레임, 인증 컨텍스트 등 요청 범위 값

pub mod entities;
pub mod dto;
pub mod models;

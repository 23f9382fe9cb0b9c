//! # Core Module
//!
//! 애플리케이션 전역에서 사용되는 핵심 구성 요소입니다.
//!
//! - [`errors`] - `AppError` 에러 분류와 HTTP 응답 변환
//! - [`container`] - 서비스 생성자 주입 조립

pub mod errors;
pub mod container;

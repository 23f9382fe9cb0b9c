//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 저장소와 하위 서비스를 트레이트 객체(`Arc<dyn ...>`)로 주입받으며,
//! [`ServiceContainer`](crate::core::container::ServiceContainer) 가 시작 시점에 조립합니다.
//!
//! # Modules
//!
//! - [`auth`] - 비밀번호 해싱, JWT, 로그인/갱신, 요청 인증 가드
//! - [`persons`] - 사용자 가입/조회/수정/삭제, 프로필 사진
//! - [`messages`] - 쪽지 조회/작성/수정/삭제

pub mod auth;
pub mod persons;
pub mod messages;

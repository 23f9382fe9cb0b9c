//! 사용자/쪽지 백엔드
//!
//! JWT 인증 기반으로 사용자 가입, 로그인, 쪽지 송수신, 프로필 사진 업로드를 제공하는
//! Actix-web REST API 서비스입니다.
//!
//! # Features
//!
//! - **사용자 관리**: 가입, 조회, 본인 정보 수정/삭제/비활성화
//! - **JWT 인증**: 액세스/리프레시 토큰 기반 상태 없는 인증
//! - **쪽지**: 보낸 사람만 수정/삭제 가능한 사용자 간 쪽지
//! - **프로필 사진**: JPEG/PNG 업로드
//! - **저장소**: MongoDB 또는 메모리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AuthMiddleware  │ ← Bearer 토큰 검증 (AuthGuard)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, 소유권 검사
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← MongoDB / In-Memory
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use persons_messages_backend::core::container::ServiceContainer;
//!
//! let container = ServiceContainer::from_env().await?;
//! let tokens = container.auth_service.login("alice@mail.com", "secret").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;

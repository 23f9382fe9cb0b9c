//! # Repository Layer
//!
//! 도메인 엔티티의 영속성을 담당하는 계층입니다.
//! 서비스 계층은 구체 타입이 아닌 [`PersonRepository`], [`MessageRepository`] 트레이트에만
//! 의존하며, 구현체는 시작 시점에 [`ServiceContainer`](crate::core::container::ServiceContainer)
//! 에서 선택됩니다.
//!
//! ## 구현체
//!
//! | 구현체 | 저장소 | 용도 |
//! |--------|--------|------|
//! | [`MongoPersonRepository`] / [`MongoMessageRepository`] | MongoDB | 운영 |
//! | [`InMemoryStore`] | 프로세스 메모리 | 로컬 실행, 테스트 |
//!
//! ## 에러 매핑
//!
//! - 이메일 중복 → `AppError::ConflictError("Email already in use")`
//! - 드라이버 오류 → `AppError::DatabaseError`

pub mod persons;
pub mod messages;
pub mod memory;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppError;
use crate::domain::entities::{messages::Message, persons::Person};

pub use persons::person_repo::MongoPersonRepository;
pub use messages::message_repo::MongoMessageRepository;
pub use memory::InMemoryStore;

pub(crate) const EMAIL_IN_USE: &str = "Email already in use";

/// 사용자 저장소
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// 새 사용자 저장
    ///
    /// 이메일이 이미 존재하면 `ConflictError` 를 반환합니다.
    async fn insert(&self, person: Person) -> Result<Person, AppError>;

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Person>, AppError>;

    /// 활성 사용자만 조회
    async fn find_active_by_id(&self, id: &ObjectId) -> Result<Option<Person>, AppError>;

    async fn find_active_by_email(&self, email: &str) -> Result<Option<Person>, AppError>;

    /// 전체 사용자 (최신순)
    async fn find_all(&self) -> Result<Vec<Person>, AppError>;

    async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Person>, AppError>;

    /// 기존 문서를 통째로 교체합니다.
    async fn save(&self, person: &Person) -> Result<(), AppError>;

    /// 사용자 삭제
    ///
    /// 해당 사용자가 보내거나 받은 쪽지도 함께 삭제됩니다.
    /// 삭제된 문서가 있으면 `true`.
    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError>;
}

/// 쪽지 저장소
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn insert(&self, message: Message) -> Result<Message, AppError>;

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Message>, AppError>;

    /// 최신순 페이지 조회
    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Message>, AppError>;

    async fn save(&self, message: &Message) -> Result<(), AppError>;

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError>;
}

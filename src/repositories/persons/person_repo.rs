//! # 사용자 리포지토리 구현
//!
//! `persons` 컬렉션에 대한 MongoDB 기반 [`PersonRepository`] 구현입니다.
//!
//! ## 인덱스
//!
//! - `email` (unique): 이메일 유일성 보장
//! - `created_at` (desc): 최신순 목록 조회

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::core::errors::AppError;
use crate::db::Database;
use crate::domain::entities::{messages::Message, persons::Person};
use crate::repositories::{PersonRepository, EMAIL_IN_USE};

pub const COLLECTION: &str = "persons";

/// MongoDB 사용자 리포지토리
///
/// 사용자 삭제 시 `messages` 컬렉션의 관련 쪽지도 함께 정리합니다.
#[derive(Clone)]
pub struct MongoPersonRepository {
    persons: Collection<Person>,
    messages: Collection<Message>,
}

impl MongoPersonRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            persons: db.collection::<Person>(COLLECTION),
            messages: db.collection::<Message>(crate::repositories::messages::message_repo::COLLECTION),
        }
    }

    /// 컬렉션 인덱스 생성
    ///
    /// 시작 시 한 번 호출됩니다. 이미 존재하는 인덱스는 그대로 유지됩니다.
    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .build();

        self.persons
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ persons 인덱스 생성 완료");
        Ok(())
    }
}

/// 중복 키(11000) 쓰기 오류 여부
pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        _ => false,
    }
}

#[async_trait]
impl PersonRepository for MongoPersonRepository {
    async fn insert(&self, person: Person) -> Result<Person, AppError> {
        self.persons.insert_one(&person).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::ConflictError(EMAIL_IN_USE.to_string())
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        debug!("사용자 저장: {}", person.id);
        Ok(person)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Person>, AppError> {
        self.persons
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_active_by_id(&self, id: &ObjectId) -> Result<Option<Person>, AppError> {
        self.persons
            .find_one(doc! { "_id": id, "active": true })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_active_by_email(&self, email: &str) -> Result<Option<Person>, AppError> {
        self.persons
            .find_one(doc! { "email": email, "active": true })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<Person>, AppError> {
        self.persons
            .find(doc! {})
            .sort(doc! { "_id": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Person>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.persons
            .find(doc! { "_id": { "$in": ids } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn save(&self, person: &Person) -> Result<(), AppError> {
        let result = self.persons
            .replace_one(doc! { "_id": person.id }, person)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError(EMAIL_IN_USE.to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("Person not found".to_string()));
        }
        Ok(())
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let messages = self.messages
            .delete_many(doc! { "$or": [{ "sender": id }, { "receiver": id }] })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let result = self.persons
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        debug!("사용자 삭제: {} (쪽지 {}건 정리)", id, messages.deleted_count);
        Ok(result.deleted_count > 0)
    }
}

//! # 쪽지 리포지토리 구현
//!
//! `messages` 컬렉션에 대한 MongoDB 기반 [`MessageRepository`] 구현입니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::info;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, IndexModel,
};
use crate::core::errors::AppError;
use crate::db::Database;
use crate::domain::entities::messages::Message;
use crate::repositories::MessageRepository;

pub const COLLECTION: &str = "messages";

#[derive(Clone)]
pub struct MongoMessageRepository {
    messages: Collection<Message>,
}

impl MongoMessageRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            messages: db.collection::<Message>(COLLECTION),
        }
    }

    /// 보낸/받은 사람 인덱스 생성 (사용자 삭제 시 정리 쿼리용)
    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        let indexes = [
            IndexModel::builder().keys(doc! { "sender": 1 }).build(),
            IndexModel::builder().keys(doc! { "receiver": 1 }).build(),
        ];

        self.messages
            .create_indexes(indexes)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ messages 인덱스 생성 완료");
        Ok(())
    }
}

#[async_trait]
impl MessageRepository for MongoMessageRepository {
    async fn insert(&self, message: Message) -> Result<Message, AppError> {
        self.messages
            .insert_one(&message)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(message)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Message>, AppError> {
        self.messages
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Message>, AppError> {
        // limit 0 은 드라이버에서 "제한 없음" 이므로 직접 처리
        if limit <= 0 {
            return Ok(Vec::new());
        }

        self.messages
            .find(doc! {})
            .sort(doc! { "_id": -1 })
            .skip(offset.max(0) as u64)
            .limit(limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn save(&self, message: &Message) -> Result<(), AppError> {
        let result = self.messages
            .replace_one(doc! { "_id": message.id }, message)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("Message not found".to_string()));
        }
        Ok(())
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self.messages
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}

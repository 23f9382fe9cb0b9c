//! Message Entity Implementation
//!
//! 한 사용자가 다른 사용자에게 보내는 쪽지 엔티티입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 쪽지 엔티티
///
/// `sender`, `receiver` 는 존재하는 [`Person`](crate::domain::entities::persons::Person) 의 ID 이며,
/// 어느 한쪽 사용자가 삭제되면 해당 쪽지도 함께 삭제됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 본문 (최대 255자)
    pub message: String,
    /// 보낸 사람 ID
    pub sender: ObjectId,
    /// 받는 사람 ID
    pub receiver: ObjectId,
    /// 읽음 여부
    pub read: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Message {
    pub fn new(message: String, sender: ObjectId, receiver: ObjectId) -> Self {
        let now = DateTime::now();

        Self {
            id: ObjectId::new(),
            message,
            sender,
            receiver,
            read: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// 보낸 사람인지 확인
    pub fn is_sent_by(&self, person_id: &ObjectId) -> bool {
        &self.sender == person_id
    }

    pub fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_is_unread() {
        let sender = ObjectId::new();
        let receiver = ObjectId::new();
        let message = Message::new("hello".to_string(), sender, receiver);

        assert!(!message.read);
        assert!(message.is_sent_by(&sender));
        assert!(!message.is_sent_by(&receiver));
    }
}

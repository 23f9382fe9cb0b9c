use serde::Serialize;
use crate::domain::dto::persons::response::PersonSummary;
use crate::domain::entities::messages::Message;

/// 쪽지 응답 DTO
///
/// 보낸 사람과 받는 사람은 `{id, name}` 요약으로 포함됩니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: String,
    pub message: String,
    pub sender: PersonSummary,
    pub receiver: PersonSummary,
    pub read: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl MessageResponse {
    pub fn new(message: Message, sender: PersonSummary, receiver: PersonSummary) -> Self {
        Self {
            id: message.id.to_hex(),
            message: message.message,
            sender,
            receiver,
            read: message.read,
            created_at: message.created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: message.updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::persons::Person;

    #[test]
    fn test_embeds_person_summaries() {
        let alice = Person::new("alice@mail.com".into(), "Alice".into(), "h".into());
        let bob = Person::new("bob@mail.com".into(), "Bob".into(), "h".into());
        let message = Message::new("hi".into(), alice.id, bob.id);

        let response = MessageResponse::new(message, (&alice).into(), (&bob).into());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["sender"], serde_json::json!({ "id": alice.id_string(), "name": "Alice" }));
        assert_eq!(json["receiver"]["name"], "Bob");
        assert_eq!(json["read"], false);
    }
}

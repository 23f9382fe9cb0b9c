//! # 쪽지 서비스
//!
//! 쪽지 목록/단건 조회와, 보낸 사람만 가능한 작성/수정/삭제를 담당합니다.

use std::collections::HashMap;
use std::sync::Arc;
use log::{info, warn};
use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppError;
use crate::domain::dto::messages::{CreateMessageRequest, MessageResponse, UpdateMessageRequest};
use crate::domain::dto::pagination::PaginationQuery;
use crate::domain::dto::persons::PersonSummary;
use crate::domain::entities::{messages::Message, parse_object_id, persons::Person};
use crate::domain::models::auth::AuthContext;
use crate::repositories::{MessageRepository, PersonRepository};

const MESSAGE_NOT_FOUND: &str = "Message not found";
const NOT_SENDER: &str = "You can only update your own messages";

pub struct MessageService {
    messages: Arc<dyn MessageRepository>,
    persons: Arc<dyn PersonRepository>,
}

impl MessageService {
    pub fn new(messages: Arc<dyn MessageRepository>, persons: Arc<dyn PersonRepository>) -> Self {
        Self { messages, persons }
    }

    /// 쪽지 목록 (최신순)
    pub async fn find_all(&self, pagination: &PaginationQuery) -> Result<Vec<MessageResponse>, AppError> {
        let messages = self.messages
            .find_page(pagination.limit(), pagination.offset())
            .await?;

        let mut ids: Vec<ObjectId> = messages
            .iter()
            .flat_map(|m| [m.sender, m.receiver])
            .collect();
        ids.sort();
        ids.dedup();

        let persons: HashMap<ObjectId, Person> = self.persons
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        Ok(messages
            .into_iter()
            .map(|message| {
                let sender = summary(&persons, &message.sender);
                let receiver = summary(&persons, &message.receiver);
                MessageResponse::new(message, sender, receiver)
            })
            .collect())
    }

    pub async fn find_one(&self, id: &str) -> Result<MessageResponse, AppError> {
        let message = self.load(id).await?;
        self.to_response(message).await
    }

    /// 쪽지 작성
    ///
    /// 보낸 사람은 인증된 사용자이며, 보낸 사람과 받는 사람 모두 활성 사용자여야 합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 보낸 사람 또는 받는 사람이 없거나 비활성
    pub async fn create(
        &self,
        request: CreateMessageRequest,
        auth: &AuthContext,
    ) -> Result<MessageResponse, AppError> {
        let sender = self.active_person(&auth.person_id()).await?;
        let receiver_id = parse_object_id(&request.receiver_id)?;
        let receiver = self.active_person(&receiver_id).await?;

        let message = self.messages
            .insert(Message::new(request.message, sender.id, receiver.id))
            .await?;
        info!("쪽지 작성: {} ({} -> {})", message.id, sender.id, receiver.id);

        Ok(MessageResponse::new(message, (&sender).into(), (&receiver).into()))
    }

    /// 쪽지 수정 (보낸 사람만)
    pub async fn update(
        &self,
        id: &str,
        request: UpdateMessageRequest,
        auth: &AuthContext,
    ) -> Result<MessageResponse, AppError> {
        let mut message = self.load_sent(id, auth).await?;

        if let Some(text) = request.message {
            message.message = text;
        }
        if let Some(read) = request.read {
            message.read = read;
        }
        message.touch();

        self.messages.save(&message).await?;
        self.to_response(message).await
    }

    /// 쪽지 삭제 (보낸 사람만)
    pub async fn delete(&self, id: &str, auth: &AuthContext) -> Result<(), AppError> {
        let message = self.load_sent(id, auth).await?;

        if !self.messages.delete(&message.id).await? {
            return Err(AppError::NotFound(MESSAGE_NOT_FOUND.to_string()));
        }

        info!("쪽지 삭제: {}", message.id);
        Ok(())
    }

    async fn load(&self, id: &str) -> Result<Message, AppError> {
        let id = parse_object_id(id)?;
        self.messages
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(MESSAGE_NOT_FOUND.to_string()))
    }

    async fn load_sent(&self, id: &str, auth: &AuthContext) -> Result<Message, AppError> {
        let message = self.load(id).await?;

        if !message.is_sent_by(&auth.person_id()) {
            warn!("다른 사용자의 쪽지 변경 시도: {} -> {}", auth.person_id(), message.id);
            return Err(AppError::AuthorizationError(NOT_SENDER.to_string()));
        }
        Ok(message)
    }

    async fn active_person(&self, id: &ObjectId) -> Result<Person, AppError> {
        self.persons
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Person not found".to_string()))
    }

    async fn to_response(&self, message: Message) -> Result<MessageResponse, AppError> {
        let persons: HashMap<ObjectId, Person> = self.persons
            .find_by_ids(&[message.sender, message.receiver])
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let sender = summary(&persons, &message.sender);
        let receiver = summary(&persons, &message.receiver);
        Ok(MessageResponse::new(message, sender, receiver))
    }
}

fn summary(persons: &HashMap<ObjectId, Person>, id: &ObjectId) -> PersonSummary {
    match persons.get(id) {
        Some(person) => person.into(),
        None => PersonSummary { id: id.to_hex(), name: String::new() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::token::TokenClaims;
    use crate::repositories::InMemoryStore;

    fn auth_for(person: &Person) -> AuthContext {
        let claims = TokenClaims {
            sub: person.id_string(),
            email: None,
            aud: "aud".to_string(),
            iss: "iss".to_string(),
            iat: 0,
            exp: 0,
        };
        AuthContext::new(claims, person.clone())
    }

    async fn setup() -> (Arc<InMemoryStore>, MessageService, Person, Person) {
        let store = Arc::new(InMemoryStore::new());
        let alice = PersonRepository::insert(
            store.as_ref(),
            Person::new("alice@mail.com".into(), "Alice".into(), "h".into()),
        )
        .await
        .unwrap();
        let bob = PersonRepository::insert(
            store.as_ref(),
            Person::new("bob@mail.com".into(), "Bob".into(), "h".into()),
        )
        .await
        .unwrap();

        let service = MessageService::new(store.clone(), store.clone());
        (store, service, alice, bob)
    }

    fn create_request(text: &str, receiver: &Person) -> CreateMessageRequest {
        CreateMessageRequest {
            message: text.to_string(),
            receiver_id: receiver.id_string(),
        }
    }

    #[actix_web::test]
    async fn test_create_embeds_sender_and_receiver() {
        let (_, service, alice, bob) = setup().await;

        let created = service.create(create_request("hi", &bob), &auth_for(&alice)).await.unwrap();

        assert_eq!(created.sender.id, alice.id_string());
        assert_eq!(created.receiver.name, "Bob");
        assert!(!created.read);
    }

    #[actix_web::test]
    async fn test_create_requires_active_receiver() {
        let (store, service, alice, mut bob) = setup().await;

        let unknown = CreateMessageRequest {
            message: "hi".to_string(),
            receiver_id: ObjectId::new().to_hex(),
        };
        assert!(matches!(
            service.create(unknown, &auth_for(&alice)).await,
            Err(AppError::NotFound(_))
        ));

        bob.active = false;
        PersonRepository::save(store.as_ref(), &bob).await.unwrap();
        assert!(matches!(
            service.create(create_request("hi", &bob), &auth_for(&alice)).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_only_sender_can_update_or_delete() {
        let (_, service, alice, bob) = setup().await;
        let created = service.create(create_request("hi", &bob), &auth_for(&alice)).await.unwrap();

        let by_bob = UpdateMessageRequest { message: None, read: Some(true) };
        assert!(matches!(
            service.update(&created.id, by_bob, &auth_for(&bob)).await,
            Err(AppError::AuthorizationError(m)) if m == "You can only update your own messages"
        ));
        assert!(matches!(
            service.delete(&created.id, &auth_for(&bob)).await,
            Err(AppError::AuthorizationError(_))
        ));

        let by_alice = UpdateMessageRequest { message: Some("edited".to_string()), read: Some(true) };
        let updated = service.update(&created.id, by_alice, &auth_for(&alice)).await.unwrap();
        assert_eq!(updated.message, "edited");
        assert!(updated.read);

        service.delete(&created.id, &auth_for(&alice)).await.unwrap();
        assert!(matches!(service.find_one(&created.id).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_find_all_paginates_newest_first() {
        let (_, service, alice, bob) = setup().await;
        let auth = auth_for(&alice);

        for i in 0..3 {
            service.create(create_request(&format!("m{}", i), &bob), &auth).await.unwrap();
        }

        let all = service.find_all(&PaginationQuery::default()).await.unwrap();
        let texts: Vec<&str> = all.iter().map(|m| m.message.as_str()).collect();
        assert_eq!(texts, vec!["m2", "m1", "m0"]);
        assert_eq!(all[0].sender.name, "Alice");

        let page = service
            .find_all(&PaginationQuery { limit: Some(1), offset: Some(1) })
            .await
            .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].message, "m1");
    }
}

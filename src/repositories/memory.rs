//! # In-Memory Repository
//!
//! 프로세스 메모리에 사용자와 쪽지를 보관하는 저장소입니다.
//! `STORAGE_BACKEND=memory` 로 실행하거나 테스트에서 사용합니다.
//!
//! 하나의 [`InMemoryStore`] 가 두 트레이트를 모두 구현하므로,
//! 사용자 삭제 시 쪽지 정리가 같은 잠금 안에서 원자적으로 수행됩니다.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppError;
use crate::domain::entities::{messages::Message, persons::Person};
use crate::repositories::{MessageRepository, PersonRepository, EMAIL_IN_USE};

#[derive(Default)]
struct State {
    persons: HashMap<ObjectId, Person>,
    messages: HashMap<ObjectId, Message>,
}

/// 메모리 기반 저장소
#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, State>, AppError> {
        self.state
            .read()
            .map_err(|_| AppError::InternalError("in-memory store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, State>, AppError> {
        self.state
            .write()
            .map_err(|_| AppError::InternalError("in-memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl PersonRepository for InMemoryStore {
    async fn insert(&self, person: Person) -> Result<Person, AppError> {
        let mut state = self.write()?;

        if state.persons.values().any(|p| p.email == person.email) {
            return Err(AppError::ConflictError(EMAIL_IN_USE.to_string()));
        }

        state.persons.insert(person.id, person.clone());
        Ok(person)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Person>, AppError> {
        Ok(self.read()?.persons.get(id).cloned())
    }

    async fn find_active_by_id(&self, id: &ObjectId) -> Result<Option<Person>, AppError> {
        Ok(self.read()?.persons.get(id).filter(|p| p.active).cloned())
    }

    async fn find_active_by_email(&self, email: &str) -> Result<Option<Person>, AppError> {
        Ok(self
            .read()?
            .persons
            .values()
            .find(|p| p.active && p.email == email)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Person>, AppError> {
        let mut persons: Vec<Person> = self.read()?.persons.values().cloned().collect();
        persons.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(persons)
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Person>, AppError> {
        let state = self.read()?;
        Ok(ids.iter().filter_map(|id| state.persons.get(id).cloned()).collect())
    }

    async fn save(&self, person: &Person) -> Result<(), AppError> {
        let mut state = self.write()?;

        if !state.persons.contains_key(&person.id) {
            return Err(AppError::NotFound("Person not found".to_string()));
        }
        if state.persons.values().any(|p| p.id != person.id && p.email == person.email) {
            return Err(AppError::ConflictError(EMAIL_IN_USE.to_string()));
        }

        state.persons.insert(person.id, person.clone());
        Ok(())
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let mut state = self.write()?;

        let removed = state.persons.remove(id).is_some();
        if removed {
            state.messages.retain(|_, m| &m.sender != id && &m.receiver != id);
        }
        Ok(removed)
    }
}

#[async_trait]
impl MessageRepository for InMemoryStore {
    async fn insert(&self, message: Message) -> Result<Message, AppError> {
        self.write()?.messages.insert(message.id, message.clone());
        Ok(message)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Message>, AppError> {
        Ok(self.read()?.messages.get(id).cloned())
    }

    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Message>, AppError> {
        let mut messages: Vec<Message> = self.read()?.messages.values().cloned().collect();
        messages.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(messages
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn save(&self, message: &Message) -> Result<(), AppError> {
        let mut state = self.write()?;

        match state.messages.get_mut(&message.id) {
            Some(existing) => {
                *existing = message.clone();
                Ok(())
            }
            None => Err(AppError::NotFound("Message not found".to_string())),
        }
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        Ok(self.write()?.messages.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(email: &str) -> Person {
        Person::new(email.to_string(), "Person".to_string(), "hash".to_string())
    }

    #[actix_web::test]
    async fn test_duplicate_email_conflicts() {
        let store = InMemoryStore::new();
        PersonRepository::insert(&store, person("a@mail.com")).await.unwrap();

        let result = PersonRepository::insert(&store, person("a@mail.com")).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_inactive_persons_are_hidden_from_active_lookups() {
        let store = InMemoryStore::new();
        let mut alice = PersonRepository::insert(&store, person("a@mail.com")).await.unwrap();
        alice.active = false;
        PersonRepository::save(&store, &alice).await.unwrap();

        assert!(store.find_active_by_id(&alice.id).await.unwrap().is_none());
        assert!(store.find_active_by_email("a@mail.com").await.unwrap().is_none());
        assert!(PersonRepository::find_by_id(&store, &alice.id).await.unwrap().is_some());
    }

    #[actix_web::test]
    async fn test_delete_person_cascades_messages() {
        let store = InMemoryStore::new();
        let alice = PersonRepository::insert(&store, person("a@mail.com")).await.unwrap();
        let bob = PersonRepository::insert(&store, person("b@mail.com")).await.unwrap();
        let carol = PersonRepository::insert(&store, person("c@mail.com")).await.unwrap();

        let sent = MessageRepository::insert(&store, Message::new("1".into(), alice.id, bob.id)).await.unwrap();
        let received = MessageRepository::insert(&store, Message::new("2".into(), bob.id, alice.id)).await.unwrap();
        let other = MessageRepository::insert(&store, Message::new("3".into(), bob.id, carol.id)).await.unwrap();

        assert!(PersonRepository::delete(&store, &alice.id).await.unwrap());

        assert!(MessageRepository::find_by_id(&store, &sent.id).await.unwrap().is_none());
        assert!(MessageRepository::find_by_id(&store, &received.id).await.unwrap().is_none());
        assert!(MessageRepository::find_by_id(&store, &other.id).await.unwrap().is_some());
    }

    #[actix_web::test]
    async fn test_find_page_newest_first() {
        let store = InMemoryStore::new();
        let sender = ObjectId::new();
        let receiver = ObjectId::new();

        let mut ids = Vec::new();
        for i in 0..5 {
            let message = MessageRepository::insert(&store, Message::new(i.to_string(), sender, receiver))
                .await
                .unwrap();
            ids.push(message.id);
        }

        let page = store.find_page(2, 1).await.unwrap();
        let page_ids: Vec<ObjectId> = page.iter().map(|m| m.id).collect();
        assert_eq!(page_ids, vec![ids[3], ids[2]]);

        assert!(store.find_page(0, 0).await.unwrap().is_empty());
    }
}

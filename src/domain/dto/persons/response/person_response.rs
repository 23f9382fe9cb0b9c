use serde::Serialize;
use crate::domain::entities::persons::Person;

/// 사용자 응답 DTO
///
/// 비밀번호 해시는 절대 포함하지 않습니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub active: bool,
    pub picture: String,
    /// ISO 8601 형식
    pub created_at: String,
    pub updated_at: String,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        let Person {
            id,
            email,
            name,
            active,
            picture,
            created_at,
            updated_at,
            ..
        } = person;

        Self {
            id: id.to_hex(),
            email,
            name,
            active,
            picture,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

/// 다른 응답에 포함되는 사용자 요약 정보
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonSummary {
    pub id: String,
    pub name: String,
}

impl From<&Person> for PersonSummary {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id_string(),
            name: person.name.clone(),
        }
    }
}

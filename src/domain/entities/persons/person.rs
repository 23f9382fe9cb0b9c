//! Person Entity Implementation
//!
//! 서비스에 가입한 사용자(Person)의 영속 엔티티입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 이메일은 저장소 수준에서 유일성이 보장되며,
/// `active` 가 `false` 인 사용자는 로그인/인가 대상에서 제외됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 표시 이름
    pub name: String,
    /// 계정 활성화 여부
    pub active: bool,
    /// 프로필 사진 파일명 (없으면 빈 문자열)
    #[serde(default)]
    pub picture: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Person {
    /// 새 사용자 생성
    ///
    /// 식별자는 생성 시점에 발급되며 활성 상태로 시작합니다.
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: ObjectId::new(),
            email,
            password_hash,
            name,
            active: true,
            picture: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }

    /// 수정 시간 갱신
    pub fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }
}

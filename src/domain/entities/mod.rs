//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! 각 엔티티는 MongoDB 컬렉션의 문서 구조와 1:1로 대응합니다.
//!
//! ## 엔티티 목록
//!
//! | 엔티티 | 컬렉션 | 설명 |
//! |--------|--------|------|
//! | [`Person`](persons::Person) | `persons` | 가입한 사용자 |
//! | [`Message`](messages::Message) | `messages` | 사용자 간 쪽지 |
//!
//! ## 식별자
//!
//! 모든 엔티티는 MongoDB `ObjectId` 를 `_id` 로 사용하며,
//! API 에서는 24자리 16진수 문자열로 주고받습니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::parse_object_id;
//!
//! let id = parse_object_id("65f1c0a2e4b0a1b2c3d4e5f6")?;
//! ```

pub mod persons;
pub mod messages;

use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppError;

/// 경로/본문으로 전달된 ID 문자열을 `ObjectId` 로 변환합니다.
///
/// # Errors
///
/// * `AppError::ValidationError` - 24자리 16진수 형식이 아닌 경우
pub fn parse_object_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw.trim())
        .map_err(|_| AppError::ValidationError(format!("'{}' is not a valid id", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);

        assert!(matches!(parse_object_id("1"), Err(AppError::ValidationError(_))));
        assert!(matches!(parse_object_id("not-an-id"), Err(AppError::ValidationError(_))));
    }
}

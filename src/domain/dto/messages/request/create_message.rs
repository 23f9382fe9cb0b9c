use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 쪽지 작성 요청 DTO
///
/// 보낸 사람은 인증된 사용자로 결정되므로 본문에 포함하지 않습니다.
///
/// ```json
/// { "message": "hello", "receiverId": "65f1c0a2e4b0a1b2c3d4e5f6" }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateMessageRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "message must be between 1 and 255 characters"
    ))]
    pub message: String,

    #[validate(custom(function = "validate_object_id"))]
    pub receiver_id: String,
}

/// 24자리 16진수 ObjectId 형식 검증
pub(crate) fn validate_object_id(value: &str) -> Result<(), ValidationError> {
    if ObjectId::parse_str(value).is_err() {
        return Err(ValidationError::new("invalid_object_id")
            .with_message("receiverId must be a valid id".into()));
    }
    Ok(())
}

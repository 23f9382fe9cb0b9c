use serde::Deserialize;
use validator::Validate;

/// 쪽지 수정 요청 DTO
///
/// 본문과 읽음 여부만 변경할 수 있습니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateMessageRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "message must be between 1 and 255 characters"
    ))]
    pub message: Option<String>,

    pub read: Option<bool>,
}

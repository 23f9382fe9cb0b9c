use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

/// 사용자 정보 수정 요청 DTO
///
/// 빈 문자열로 전달된 필드는 변경하지 않는 것으로 간주합니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdatePersonRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(
        min = 3,
        max = 100,
        message = "name must be between 3 and 100 characters"
    ))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(min = 5, message = "password must be longer than or equal to 5 characters"))]
    pub password: Option<String>,
}

impl UpdatePersonRequest {
    /// 변경할 필드가 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.password.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_become_none() {
        let request: UpdatePersonRequest =
            serde_json::from_str(r#"{"name": "   ", "password": ""}"#).unwrap();

        assert!(request.is_empty());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_are_allowed() {
        let request: UpdatePersonRequest = serde_json::from_str("{}").unwrap();
        assert!(request.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(serde_json::from_str::<UpdatePersonRequest>(r#"{"email": "x@mail.com"}"#).is_err());
        assert!(serde_json::from_str::<UpdatePersonRequest>(r#"{"active": true}"#).is_err());
    }

    #[test]
    fn test_present_fields_are_validated() {
        let request: UpdatePersonRequest =
            serde_json::from_str(r#"{"name": "Bo", "password": "1234"}"#).unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("password"));
    }
}

//! # 사용자 가입 요청 DTO
//!
//! `POST /persons` 의 요청 본문입니다.
//!
//! ## 검증 규칙
//!
//! - `email`: 이메일 형식 (중복 여부는 저장소에서 검증)
//! - `password`: 최소 5자
//! - `name`: 3-100자

use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::deserialize_email;

/// 새로운 사용자 가입을 위한 요청 DTO
///
/// 정의되지 않은 필드(`active`, `passwordHash` 등)가 포함되면 거부됩니다.
/// 이메일은 역직렬화 시 공백 제거 후 소문자로 정규화됩니다.
///
/// # JSON 예제
///
/// ```json
/// {
///   "email": "alice@mail.com",
///   "password": "secret",
///   "name": "Alice"
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreatePersonRequest {
    #[serde(deserialize_with = "deserialize_email")]
    #[validate(email(message = "email must be an email"))]
    pub email: String,

    /// 평문 비밀번호 (서비스 계층에서 해싱됨)
    #[validate(length(min = 5, message = "password must be longer than or equal to 5 characters"))]
    pub password: String,

    #[validate(length(
        min = 3,
        max = 100,
        message = "name must be between 3 and 100 characters"
    ))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str, name: &str) -> CreatePersonRequest {
        CreatePersonRequest {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("alice@mail.com", "12345", "Alice").validate().is_ok());
    }

    #[test]
    fn test_short_password_is_rejected() {
        let errors = request("alice@mail.com", "1234", "Alice").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_email_is_normalized_before_validation() {
        let request: CreatePersonRequest = serde_json::from_str(
            r#"{"email": " Alice@Mail.com ", "password": "secret", "name": "Alice"}"#,
        )
        .unwrap();

        assert_eq!(request.email, "alice@mail.com");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result = serde_json::from_str::<CreatePersonRequest>(
            r#"{"email": "alice@mail.com", "password": "secret", "name": "Alice", "active": false}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_name_length_bounds() {
        assert!(request("alice@mail.com", "12345", "Al").validate().is_err());
        assert!(request("alice@mail.com", "12345", &"a".repeat(100)).validate().is_ok());
        assert!(request("alice@mail.com", "12345", &"a".repeat(101)).validate().is_err());
    }
}

//! # 문자열 유틸리티
//!
//! 요청 DTO 역직렬화에 쓰이는 문자열 정리 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 이메일 정규화 (앞뒤 공백 제거, 소문자 변환)
///
/// 가입과 로그인에서 같은 규칙으로 정규화해야 유일성 검사가 의미를 가집니다.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 이메일 필드를 위한 serde deserializer
///
/// 형식 검증 전에 [`normalize_email`] 을 적용합니다.
///
/// ```rust,ignore
/// #[serde(deserialize_with = "deserialize_email")]
/// pub email: String,
///
/// // {"email": " Alice@Mail.com "} → "alice@mail.com"
/// ```
pub fn deserialize_email<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(normalize_email(&raw))
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 빈 문자열이나 공백만 있는 문자열을 None으로 변환합니다.
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]` 와 함께 사용됩니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct UpdatePersonRequest {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     name: Option<String>,
/// }
///
/// // {"name": "  Alice  "} → Some("Alice")
/// // {"name": ""} → None
/// // {"name": null} → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Alice@Mail.COM "), "alice@mail.com");
    }

    #[test]
    fn test_deserialize_email() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(deserialize_with = "deserialize_email")]
            email: String,
        }

        let result: TestStruct = serde_json::from_str(r#"{"email": "  Alice@Mail.COM "}"#).unwrap();
        assert_eq!(result.email, "alice@mail.com");

        assert!(serde_json::from_str::<TestStruct>(r#"{"email": 1}"#).is_err());
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        // 유효한 문자열 - 공백이 제거되고 Some 반환
        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "  Hello World  "}"#).unwrap();
        assert_eq!(result.optional_field, Some("Hello World".to_string()));

        // 공백만 있는 문자열 - None 반환
        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "\t\n  "}"#).unwrap();
        assert_eq!(result.optional_field, None);

        // null 값 - None 반환
        let result: TestStruct = serde_json::from_str(r#"{"optional_field": null}"#).unwrap();
        assert_eq!(result.optional_field, None);

        // 필드가 없는 경우 - default 사용
        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(result.optional_field, None);

        // 한글 문자열
        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "  안녕하세요  "}"#).unwrap();
        assert_eq!(result.optional_field, Some("안녕하세요".to_string()));
    }
}

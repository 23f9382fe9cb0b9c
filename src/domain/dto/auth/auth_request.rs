//! 인증 요청관련 DTO
//!
//! 로그인과 토큰 갱신 요청 정보를 매핑합니다.
use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::deserialize_email;

/// 로그인 요청 구조체
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    #[serde(deserialize_with = "deserialize_email")]
    #[validate(email(message = "email must be an email"))]
    pub email: String,

    #[validate(length(min = 1, message = "password should not be empty"))]
    pub password: String,
}

/// 리프레시 토큰 요청 구조체
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "refreshToken should not be empty"))]
    pub refresh_token: String,
}

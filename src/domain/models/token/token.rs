//! JWT 인증 토큰 클레임 및 토큰 쌍
//!
//! RFC 7519 표준 클레임과 로그인/갱신 시 클라이언트에 전달되는 토큰 쌍을 정의합니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (Person ID)
/// - `email`: 사용자 이메일 (액세스 토큰에만 포함)
/// - `aud`, `iss`: 발급 대상과 발급자
/// - `iat`, `exp`: 발급/만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (Person ID)
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub aud: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

/// 서명 시 추가로 포함되는 클레임
#[derive(Debug, Clone, Default)]
pub struct ExtraClaims {
    pub email: Option<String>,
}

impl ExtraClaims {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self { email: Some(email.into()) }
    }
}

/// 로그인/갱신 응답으로 전달되는 토큰 쌍
///
/// 액세스 토큰과 리프레시 토큰은 같은 주체를 가지지만 서로 독립적으로 만료됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
}

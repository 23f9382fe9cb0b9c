//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── auth/           # 로그인, 토큰 갱신 요청
//! ├── persons/
//! │   ├── request/    # 가입, 수정, 사진 업로드
//! │   └── response/   # PersonResponse, PersonSummary
//! ├── messages/
//! │   ├── request/    # 쪽지 작성, 수정
//! │   └── response/   # MessageResponse
//! └── pagination.rs   # limit/offset 쿼리
//! ```
//!
//! ## 유효성 검증
//!
//! 모든 요청 DTO 는 `validator::Validate` 를 구현하며, 핸들러는 서비스 계층을
//! 호출하기 전에 [`validate_request`] 로 검증합니다.
//!
//! ```rust,ignore
//! #[post("")]
//! async fn create(payload: web::Json<CreatePersonRequest>) -> Result<HttpResponse, AppError> {
//!     validate_request(&*payload)?;
//!     // ...
//! }
//! ```

pub mod auth;
pub mod persons;
pub mod messages;
pub mod pagination;

use validator::Validate;
use crate::core::errors::AppResult;

pub use pagination::PaginationQuery;

/// 요청 DTO 검증
///
/// 실패 시 필드별 메시지를 모은 `AppError::ValidationError` 를 반환합니다.
pub fn validate_request<T: Validate>(request: &T) -> AppResult<()> {
    request.validate()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use crate::domain::dto::persons::CreatePersonRequest;

    #[test]
    fn test_validate_request_maps_to_validation_error() {
        let request = CreatePersonRequest {
            email: "alice@mail.com".to_string(),
            password: "1".to_string(),
            name: "Alice".to_string(),
        };

        match validate_request(&request) {
            Err(AppError::ValidationError(message)) => {
                assert_eq!(message, "password must be longer than or equal to 5 characters");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

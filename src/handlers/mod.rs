//! HTTP 핸들러 모듈
//!
//! 핸들러는 요청을 추출/검증한 뒤 서비스 계층에 위임하고,
//! 결과를 HTTP 응답으로 변환하는 경계 계층입니다.
//!
//! JSON 본문, 쿼리, 경로 추출 실패도 [`AppError::ValidationError`] 로 변환되어
//! 다른 에러와 같은 `{statusCode, message, error}` 형식으로 응답합니다.

pub mod auth;
pub mod persons;
pub mod messages;

use actix_web::web;
use crate::core::errors::AppError;

/// JSON 본문 추출 설정
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

/// 쿼리 문자열 추출 설정
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

/// 경로 파라미터 추출 설정
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

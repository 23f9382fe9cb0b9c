//! 인증 핸들러
//!
//! - `POST /auth/login` - 이메일/비밀번호 로그인
//! - `POST /auth/refresh` - 리프레시 토큰으로 토큰 쌍 재발급

use actix_web::{post, web, HttpResponse};
use crate::core::container::ServiceContainer;
use crate::core::errors::AppError;
use crate::domain::dto::auth::{LoginRequest, RefreshTokenRequest};
use crate::domain::dto::validate_request;

#[post("/login")]
pub async fn login(
    container: web::Data<ServiceContainer>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*payload)?;

    let tokens = container
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(HttpResponse::Ok().json(tokens))
}

#[post("/refresh")]
pub async fn refresh(
    container: web::Data<ServiceContainer>,
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*payload)?;

    let tokens = container.auth_service.refresh(&payload.refresh_token).await?;

    Ok(HttpResponse::Ok().json(tokens))
}

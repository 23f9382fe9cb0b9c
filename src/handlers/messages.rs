//! 쪽지 핸들러
//!
//! 조회는 익명으로도 가능하고, 작성/수정/삭제는 Bearer 인증이 필요합니다.

use actix_web::{delete, get, patch, post, web, HttpResponse};
use crate::core::container::ServiceContainer;
use crate::core::errors::AppError;
use crate::domain::dto::messages::{CreateMessageRequest, UpdateMessageRequest};
use crate::domain::dto::{validate_request, PaginationQuery};
use crate::domain::models::auth::{AuthContext, OptionalAuth};
use crate::middlewares::AuthMiddleware;

#[get("", wrap = "AuthMiddleware::optional()")]
pub async fn find_all(
    container: web::Data<ServiceContainer>,
    OptionalAuth(auth): OptionalAuth,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*query)?;

    if let Some(auth) = auth {
        log::debug!("쪽지 목록 조회: 사용자 {}", auth.person_id());
    }

    let messages = container.message_service.find_all(&query).await?;
    Ok(HttpResponse::Ok().json(messages))
}

#[get("/{id}", wrap = "AuthMiddleware::optional()")]
pub async fn find_one(
    container: web::Data<ServiceContainer>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let message = container.message_service.find_one(&id).await?;
    Ok(HttpResponse::Ok().json(message))
}

#[post("", wrap = "AuthMiddleware::required()")]
pub async fn create(
    container: web::Data<ServiceContainer>,
    auth: AuthContext,
    payload: web::Json<CreateMessageRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*payload)?;

    let message = container
        .message_service
        .create(payload.into_inner(), &auth)
        .await?;

    Ok(HttpResponse::Created().json(message))
}

#[patch("/{id}", wrap = "AuthMiddleware::required()")]
pub async fn update(
    container: web::Data<ServiceContainer>,
    auth: AuthContext,
    id: web::Path<String>,
    payload: web::Json<UpdateMessageRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*payload)?;

    let message = container
        .message_service
        .update(&id, payload.into_inner(), &auth)
        .await?;

    Ok(HttpResponse::Ok().json(message))
}

#[delete("/{id}", wrap = "AuthMiddleware::required()")]
pub async fn remove(
    container: web::Data<ServiceContainer>,
    auth: AuthContext,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    container.message_service.delete(&id, &auth).await?;
    Ok(HttpResponse::NoContent().finish())
}

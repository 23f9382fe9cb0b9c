//! 사용자 핸들러
//!
//! 가입(`POST /persons`)을 제외한 모든 엔드포인트는 Bearer 인증이 필요하며,
//! 변경 연산은 본인만 수행할 수 있습니다.

use actix_multipart::Multipart;
use actix_web::{delete, get, patch, post, web, HttpResponse};
use futures_util::TryStreamExt;
use crate::core::container::ServiceContainer;
use crate::core::errors::AppError;
use crate::domain::dto::persons::{CreatePersonRequest, PictureUpload, UpdatePersonRequest};
use crate::domain::dto::validate_request;
use crate::domain::models::auth::AuthContext;
use crate::middlewares::AuthMiddleware;

/// multipart 파일 필드 이름
const PICTURE_FIELD: &str = "file";

#[post("")]
pub async fn create(
    container: web::Data<ServiceContainer>,
    payload: web::Json<CreatePersonRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*payload)?;

    let person = container.person_service.create(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(person))
}

#[get("", wrap = "AuthMiddleware::required()")]
pub async fn find_all(container: web::Data<ServiceContainer>) -> Result<HttpResponse, AppError> {
    let persons = container.person_service.find_all().await?;
    Ok(HttpResponse::Ok().json(persons))
}

#[post("/upload-picture", wrap = "AuthMiddleware::required()")]
pub async fn upload_picture(
    container: web::Data<ServiceContainer>,
    auth: AuthContext,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let max_bytes = container.person_service.upload_limits().max_bytes;
    let upload = read_picture_field(payload, max_bytes).await?;

    let person = container.person_service.upload_picture(upload, &auth).await?;

    Ok(HttpResponse::Ok().json(person))
}

#[get("/{id}", wrap = "AuthMiddleware::required()")]
pub async fn find_one(
    container: web::Data<ServiceContainer>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let person = container.person_service.find_one(&id).await?;
    Ok(HttpResponse::Ok().json(person))
}

#[patch("/{id}", wrap = "AuthMiddleware::required()")]
pub async fn update(
    container: web::Data<ServiceContainer>,
    auth: AuthContext,
    id: web::Path<String>,
    payload: web::Json<UpdatePersonRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*payload)?;

    let person = container
        .person_service
        .update(&id, payload.into_inner(), &auth)
        .await?;

    Ok(HttpResponse::Ok().json(person))
}

#[delete("/{id}", wrap = "AuthMiddleware::required()")]
pub async fn remove(
    container: web::Data<ServiceContainer>,
    auth: AuthContext,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    container.person_service.remove(&id, &auth).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/{id}/deactivate", wrap = "AuthMiddleware::required()")]
pub async fn deactivate(
    container: web::Data<ServiceContainer>,
    auth: AuthContext,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let person = container.person_service.deactivate(&id, &auth).await?;
    Ok(HttpResponse::Ok().json(person))
}

/// multipart 본문에서 `file` 필드를 읽습니다.
///
/// 최대 크기를 넘는 순간 읽기를 중단합니다. 다른 필드는 무시합니다.
async fn read_picture_field(mut payload: Multipart, max_bytes: usize) -> Result<PictureUpload, AppError> {
    while let Some(mut field) = payload.try_next().await.map_err(multipart_error)? {
        let (name, file_name) = match field.content_disposition() {
            Some(disposition) => (
                disposition.get_name().map(str::to_string),
                disposition.get_filename().map(str::to_string),
            ),
            None => (None, None),
        };

        if name.as_deref() != Some(PICTURE_FIELD) {
            continue;
        }

        let content_type = field
            .content_type()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_default();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(multipart_error)? {
            if bytes.len() + chunk.len() > max_bytes {
                return Err(AppError::ValidationError("File size is too large".to_string()));
            }
            bytes.extend_from_slice(&chunk);
        }

        return Ok(PictureUpload::new(file_name.unwrap_or_default(), content_type, bytes));
    }

    Err(AppError::ValidationError("file is required".to_string()))
}

fn multipart_error(e: actix_multipart::MultipartError) -> AppError {
    AppError::ValidationError(format!("Invalid multipart body: {}", e))
}

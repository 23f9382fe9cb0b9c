//! 라우트 구성
//!
//! | 경로 | 인증 |
//! |------|------|
//! | `GET /health` | 없음 |
//! | `POST /auth/login`, `POST /auth/refresh` | 없음 |
//! | `POST /persons` | 없음 |
//! | `/persons/**` 나머지 | 필수 |
//! | `GET /messages`, `GET /messages/{id}` | 선택 |
//! | `POST`/`PATCH`/`DELETE /messages/**` | 필수 |
//!
//! 인증은 각 핸들러의 `wrap = "AuthMiddleware::..."` 속성으로 적용됩니다.

use crate::handlers;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // 추출 실패를 공통 에러 형식으로 변환
    cfg.app_data(handlers::json_config())
        .app_data(handlers::query_config())
        .app_data(handlers::path_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_person_routes(cfg);
    configure_message_routes(cfg);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::login)
            .service(handlers::auth::refresh)
    );
}

fn configure_person_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/persons")
            .service(handlers::persons::create)
            .service(handlers::persons::find_all)
            // `/{id}` 보다 먼저 등록
            .service(handlers::persons::upload_picture)
            .service(handlers::persons::find_one)
            .service(handlers::persons::update)
            .service(handlers::persons::remove)
            .service(handlers::persons::deactivate)
    );
}

fn configure_message_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/messages")
            .service(handlers::messages::find_all)
            .service(handlers::messages::create)
            .service(handlers::messages::find_one)
            .service(handlers::messages::update)
            .service(handlers::messages::remove)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "persons_messages_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

//! 인증 미들웨어
//!
//! 라우트 단위로 적용되는 Bearer 토큰 인증 미들웨어입니다.
//! 실제 검증은 [`AuthGuard`](crate::services::auth::AuthGuard) 가 수행하며,
//! 성공 시 [`AuthContext`](crate::domain::models::auth::AuthContext) 를
//! 요청 extensions 에 저장합니다.
//!
//! ```rust,ignore
//! #[patch("/{id}", wrap = "AuthMiddleware::required()")]
//! async fn update(auth: AuthContext, ...) -> Result<HttpResponse, AppError> { ... }
//!
//! #[get("", wrap = "AuthMiddleware::optional()")]
//! async fn find_all(OptionalAuth(auth): OptionalAuth, ...) -> Result<HttpResponse, AppError> { ... }
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::auth::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;

pub struct AuthMiddleware {
    mode: AuthMode,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    /// 인증 필수: 실패 시 401 응답
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 인증 선택: 유효한 토큰이 있으면 인증 정보를 부착하고, 없으면 그대로 진행
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode.clone(),
        }))
    }
}

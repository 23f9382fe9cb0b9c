use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppError;
use crate::domain::entities::persons::Person;
use crate::domain::models::token::TokenClaims;

/// 인증 가드가 요청에 부착하는 인증 정보
///
/// 검증된 토큰 클레임과, 그 주체로 조회한 활성 사용자를 함께 담습니다.
/// 핸들러는 이 값을 서비스 계층에 그대로 넘겨 소유권 검사를 수행합니다.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub claims: TokenClaims,
    pub person: Person,
}

impl AuthContext {
    pub fn new(claims: TokenClaims, person: Person) -> Self {
        Self { claims, person }
    }

    /// 인증된 사용자 ID
    pub fn person_id(&self) -> ObjectId {
        self.person.id
    }

    /// 주어진 ID 의 소유자인지 확인
    pub fn owns(&self, owner_id: &ObjectId) -> bool {
        &self.person.id == owner_id
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthContext {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthContext>() {
            Some(context) => ready(Ok(context.clone())),
            None => ready(Err(AppError::AuthenticationError("Unauthorized".to_string()))),
        }
    }
}

/// 선택적 인증 정보 추출자
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<AuthContext>);

impl FromRequest for OptionalAuth {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let context = req.extensions().get::<AuthContext>().cloned();
        ready(Ok(OptionalAuth(context)))
    }
}

//! 요청 인증 가드
//!
//! `Authorization: Bearer <token>` 헤더를 검증하고, 토큰 주체에 해당하는
//! 활성 사용자를 조회하여 [`AuthContext`] 를 만듭니다.
//! 미들웨어([`AuthMiddleware`](crate::middlewares::AuthMiddleware))가 이 가드를 호출합니다.

use std::sync::Arc;
use log::debug;
use crate::core::errors::AppError;
use crate::domain::entities::parse_object_id;
use crate::domain::models::auth::AuthContext;
use crate::repositories::PersonRepository;
use crate::services::auth::TokenService;

const UNAUTHORIZED: &str = "Unauthorized";

pub struct AuthGuard {
    persons: Arc<dyn PersonRepository>,
    tokens: Arc<dyn TokenService>,
}

impl AuthGuard {
    pub fn new(persons: Arc<dyn PersonRepository>, tokens: Arc<dyn TokenService>) -> Self {
        Self { persons, tokens }
    }

    /// Authorization 헤더 값으로 인증
    ///
    /// 헤더 누락, 형식 오류, 토큰 검증 실패, 사용자 없음/비활성, 저장소 오류 등
    /// 모든 실패는 `AuthenticationError("Unauthorized")` 하나로 정규화됩니다.
    pub async fn authenticate(&self, authorization: Option<&str>) -> Result<AuthContext, AppError> {
        self.try_authenticate(authorization).await.map_err(|e| {
            debug!("인증 실패: {}", e);
            AppError::AuthenticationError(UNAUTHORIZED.to_string())
        })
    }

    async fn try_authenticate(&self, authorization: Option<&str>) -> Result<AuthContext, AppError> {
        let header = authorization
            .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;
        let token = extract_bearer_token(header)?;

        let claims = self.tokens.verify(token)?;
        let person_id = parse_object_id(&claims.sub)?;

        let person = self.persons
            .find_active_by_id(&person_id)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("활성 사용자가 아닙니다".to_string()))?;

        Ok(AuthContext::new(claims, person))
    }
}

/// Bearer 토큰에서 실제 토큰 부분 추출
///
/// "Bearer {token}" 형식이 아니거나 토큰이 비어 있으면 실패합니다.
pub fn extract_bearer_token(header: &str) -> Result<&str, AppError> {
    match header.trim().split_once(' ') {
        Some((scheme, token)) if scheme == "Bearer" && !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(AppError::AuthenticationError("Bearer 토큰 형식이 아닙니다".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtConfig;
    use crate::domain::entities::persons::Person;
    use crate::domain::models::token::ExtraClaims;
    use crate::repositories::InMemoryStore;
    use crate::services::auth::JwtTokenService;

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc").unwrap(), "abc");
        assert!(extract_bearer_token("Basic abc").is_err());
        assert!(extract_bearer_token("Bearer").is_err());
        assert!(extract_bearer_token("Bearer   ").is_err());
        assert!(extract_bearer_token("abc").is_err());
    }

    async fn setup() -> (Arc<InMemoryStore>, Arc<JwtTokenService>, AuthGuard, Person) {
        let store = Arc::new(InMemoryStore::new());
        let tokens = Arc::new(JwtTokenService::new(JwtConfig {
            secret: "test-secret".to_string(),
            audience: "aud".to_string(),
            issuer: "iss".to_string(),
            ttl_seconds: 3600,
            refresh_ttl_seconds: 86400,
        }));
        let person = PersonRepository::insert(
            store.as_ref(),
            Person::new("alice@mail.com".into(), "Alice".into(), "hash".into()),
        )
        .await
        .unwrap();

        let guard = AuthGuard::new(store.clone(), tokens.clone());
        (store, tokens, guard, person)
    }

    #[actix_web::test]
    async fn test_valid_token_attaches_person() {
        let (_, tokens, guard, person) = setup().await;
        let token = tokens.sign(&person.id_string(), 60, ExtraClaims::default()).unwrap();

        let header = format!("Bearer {}", token);
        let context = guard.authenticate(Some(header.as_str())).await.unwrap();
        assert_eq!(context.person_id(), person.id);
    }

    #[actix_web::test]
    async fn test_failures_collapse_to_unauthorized() {
        let (store, tokens, guard, person) = setup().await;

        for header in [None, Some("Bearer garbage"), Some("Token abc")] {
            let result = guard.authenticate(header).await;
            assert!(matches!(result, Err(AppError::AuthenticationError(m)) if m == "Unauthorized"));
        }

        // 잘못된 주체
        let token = tokens.sign("not-an-object-id", 60, ExtraClaims::default()).unwrap();
        let header = format!("Bearer {}", token);
        assert!(guard.authenticate(Some(header.as_str())).await.is_err());

        // 비활성 사용자
        let token = tokens.sign(&person.id_string(), 60, ExtraClaims::default()).unwrap();
        let mut inactive = person.clone();
        inactive.active = false;
        PersonRepository::save(store.as_ref(), &inactive).await.unwrap();
        let header = format!("Bearer {}", token);
        assert!(guard.authenticate(Some(header.as_str())).await.is_err());
    }
}

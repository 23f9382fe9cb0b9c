//! 인증 서비스
//!
//! 이메일/비밀번호 로그인과 리프레시 토큰을 통한 토큰 재발급을 담당합니다.
//!
//! ## 실패 정책
//!
//! | 상황 | 결과 |
//! |------|------|
//! | 활성 사용자 없음 (로그인) | `NotFound("User not authorized")` |
//! | 비밀번호 불일치 | `AuthenticationError("Invalid user or password")` |
//! | 리프레시 실패 (모든 원인) | `AuthenticationError("Invalid refresh token")` |

use std::sync::Arc;
use log::{info, warn};
use crate::core::errors::AppError;
use crate::domain::entities::{parse_object_id, persons::Person};
use crate::domain::models::token::{ExtraClaims, TokenPair};
use crate::repositories::PersonRepository;
use crate::services::auth::{HashingService, TokenService};
use crate::utils::string_utils::normalize_email;

pub struct AuthService {
    persons: Arc<dyn PersonRepository>,
    hashing: Arc<dyn HashingService>,
    tokens: Arc<dyn TokenService>,
}

impl AuthService {
    pub fn new(
        persons: Arc<dyn PersonRepository>,
        hashing: Arc<dyn HashingService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self { persons, hashing, tokens }
    }

    /// 이메일/비밀번호 로그인
    ///
    /// 활성 사용자만 로그인할 수 있습니다. 성공 시 액세스 토큰(이메일 포함)과
    /// 리프레시 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 이메일의 활성 사용자가 없음
    /// * `AppError::AuthenticationError` - 비밀번호 불일치
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AppError> {
        let email = normalize_email(email);

        let person = self.persons
            .find_active_by_email(&email)
            .await?
            .ok_or_else(|| {
                warn!("로그인 실패 - 활성 사용자 없음: {}", email);
                AppError::NotFound("User not authorized".to_string())
            })?;

        if !self.hashing.compare(password, &person.password_hash).await? {
            warn!("로그인 실패 - 비밀번호 불일치: {}", person.id);
            return Err(AppError::AuthenticationError("Invalid user or password".to_string()));
        }

        info!("로그인 성공: {}", person.id);
        self.issue_tokens(&person)
    }

    /// 리프레시 토큰으로 새 토큰 쌍 발급
    ///
    /// 사용자 활성 상태를 매번 다시 확인하므로, 비활성화된 사용자는
    /// 만료 전의 리프레시 토큰으로도 재발급받을 수 없습니다.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        self.try_refresh(refresh_token).await.map_err(|e| {
            warn!("토큰 갱신 실패: {}", e);
            AppError::AuthenticationError("Invalid refresh token".to_string())
        })
    }

    async fn try_refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let claims = self.tokens.verify(refresh_token)?;
        let person_id = parse_object_id(&claims.sub)?;

        let person = self.persons
            .find_active_by_id(&person_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not authorized".to_string()))?;

        self.issue_tokens(&person)
    }

    fn issue_tokens(&self, person: &Person) -> Result<TokenPair, AppError> {
        let subject = person.id_string();

        let token = self.tokens.sign(
            &subject,
            self.tokens.access_ttl(),
            ExtraClaims::with_email(person.email.clone()),
        )?;
        let refresh_token = self.tokens.sign(
            &subject,
            self.tokens.refresh_ttl(),
            ExtraClaims::default(),
        )?;

        Ok(TokenPair { token, refresh_token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtConfig;
    use crate::repositories::InMemoryStore;
    use crate::services::auth::{BcryptHashingService, JwtTokenService};

    fn jwt_config(refresh_ttl_seconds: i64) -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            audience: "aud".to_string(),
            issuer: "iss".to_string(),
            ttl_seconds: 3600,
            refresh_ttl_seconds,
        }
    }

    struct Fixture {
        store: Arc<InMemoryStore>,
        tokens: Arc<JwtTokenService>,
        auth: AuthService,
        person: Person,
    }

    async fn fixture(refresh_ttl_seconds: i64) -> Fixture {
        let store = Arc::new(InMemoryStore::new());
        let hashing = Arc::new(BcryptHashingService::new(4));
        let tokens = Arc::new(JwtTokenService::new(jwt_config(refresh_ttl_seconds)));

        let hash = hashing.hash("secret").await.unwrap();
        let person = PersonRepository::insert(
            store.as_ref(),
            Person::new("alice@mail.com".into(), "Alice".into(), hash),
        )
        .await
        .unwrap();

        let auth = AuthService::new(store.clone(), hashing, tokens.clone());
        Fixture { store, tokens, auth, person }
    }

    #[actix_web::test]
    async fn test_login_issues_pair_bound_to_person() {
        let f = fixture(86400).await;

        let pair = f.auth.login("alice@mail.com", "secret").await.unwrap();

        let access = f.tokens.verify(&pair.token).unwrap();
        let refresh = f.tokens.verify(&pair.refresh_token).unwrap();
        assert_eq!(access.sub, f.person.id_string());
        assert_eq!(access.email.as_deref(), Some("alice@mail.com"));
        assert_eq!(refresh.sub, f.person.id_string());
        assert!(refresh.email.is_none());
    }

    #[actix_web::test]
    async fn test_login_failures() {
        let f = fixture(86400).await;

        let unknown = f.auth.login("nobody@mail.com", "secret").await;
        assert!(matches!(unknown, Err(AppError::NotFound(m)) if m == "User not authorized"));

        let wrong = f.auth.login("alice@mail.com", "wrong").await;
        assert!(matches!(wrong, Err(AppError::AuthenticationError(m)) if m == "Invalid user or password"));
    }

    #[actix_web::test]
    async fn test_refresh_before_expiry_succeeds() {
        let f = fixture(86400).await;
        let pair = f.auth.login("alice@mail.com", "secret").await.unwrap();

        let refreshed = f.auth.refresh(&pair.refresh_token).await.unwrap();
        assert_eq!(f.tokens.verify(&refreshed.token).unwrap().sub, f.person.id_string());
    }

    #[actix_web::test]
    async fn test_refresh_after_expiry_fails() {
        let f = fixture(-10).await;
        let pair = f.auth.login("alice@mail.com", "secret").await.unwrap();

        let result = f.auth.refresh(&pair.refresh_token).await;
        assert!(matches!(result, Err(AppError::AuthenticationError(m)) if m == "Invalid refresh token"));
    }

    #[actix_web::test]
    async fn test_deactivated_person_cannot_login_or_refresh() {
        let f = fixture(86400).await;
        let pair = f.auth.login("alice@mail.com", "secret").await.unwrap();

        let mut person = f.person.clone();
        person.active = false;
        PersonRepository::save(f.store.as_ref(), &person).await.unwrap();

        assert!(matches!(
            f.auth.login("alice@mail.com", "secret").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            f.auth.refresh(&pair.refresh_token).await,
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_refresh_with_garbage_fails() {
        let f = fixture(86400).await;
        assert!(matches!(
            f.auth.refresh("garbage").await,
            Err(AppError::AuthenticationError(m)) if m == "Invalid refresh token"
        ));
    }
}

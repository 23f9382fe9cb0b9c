//! # Service Container
//!
//! 애플리케이션 시작 시 모든 서비스를 생성자 주입으로 조립합니다.
//! 조립된 컨테이너는 `web::Data<ServiceContainer>` 로 등록되어
//! 핸들러와 인증 미들웨어에서 공유됩니다.
//!
//! ```text
//! ServiceContainer
//! ├── AuthService    ← PersonRepository, HashingService, TokenService
//! ├── AuthGuard      ← PersonRepository, TokenService
//! ├── PersonService  ← PersonRepository, HashingService, UploadConfig
//! └── MessageService ← MessageRepository, PersonRepository
//! ```
//!
//! ```rust,ignore
//! let container = web::Data::new(ServiceContainer::from_env().await?);
//!
//! HttpServer::new(move || App::new().app_data(container.clone()))
//! ```

use std::sync::Arc;
use log::info;
use crate::config::{
    DatabaseConfig, JwtConfig, PasswordConfig, StorageBackend, UploadConfig,
};
use crate::core::errors::AppError;
use crate::db::Database;
use crate::repositories::{
    InMemoryStore, MessageRepository, MongoMessageRepository, MongoPersonRepository,
    PersonRepository,
};
use crate::services::auth::{
    AuthGuard, AuthService, BcryptHashingService, HashingService, JwtTokenService, TokenService,
};
use crate::services::messages::MessageService;
use crate::services::persons::PersonService;

/// 애플리케이션 서비스 묶음
pub struct ServiceContainer {
    pub auth_service: AuthService,
    pub auth_guard: Arc<AuthGuard>,
    pub person_service: PersonService,
    pub message_service: MessageService,
}

impl ServiceContainer {
    /// 주어진 저장소와 하위 서비스로 컨테이너 조립
    pub fn new(
        persons: Arc<dyn PersonRepository>,
        messages: Arc<dyn MessageRepository>,
        hashing: Arc<dyn HashingService>,
        tokens: Arc<dyn TokenService>,
        uploads: UploadConfig,
    ) -> Self {
        Self {
            auth_service: AuthService::new(persons.clone(), hashing.clone(), tokens.clone()),
            auth_guard: Arc::new(AuthGuard::new(persons.clone(), tokens)),
            person_service: PersonService::new(persons.clone(), hashing, uploads),
            message_service: MessageService::new(messages, persons),
        }
    }

    /// 메모리 저장소 기반 컨테이너
    ///
    /// `STORAGE_BACKEND=memory` 실행과 통합 테스트에서 사용합니다.
    pub fn in_memory(jwt: JwtConfig, bcrypt_cost: u32, uploads: UploadConfig) -> Self {
        let store = Arc::new(InMemoryStore::new());

        Self::new(
            store.clone(),
            store,
            Arc::new(BcryptHashingService::new(bcrypt_cost)),
            Arc::new(JwtTokenService::new(jwt)),
            uploads,
        )
    }

    /// 환경 변수 설정으로 컨테이너 조립
    ///
    /// MongoDB 백엔드인 경우 연결 확인과 인덱스 생성까지 수행합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - MongoDB 연결 또는 인덱스 생성 실패
    pub async fn from_env() -> Result<Self, AppError> {
        let jwt = JwtConfig::from_env();
        let bcrypt_cost = PasswordConfig::bcrypt_cost();
        let uploads = UploadConfig::from_env();
        let database = DatabaseConfig::from_env();

        info!(
            "🔧 서비스 조립: storage={:?}, bcrypt cost={}, pictures={}",
            database.backend,
            bcrypt_cost,
            uploads.pictures_dir.display()
        );

        match database.backend {
            StorageBackend::Memory => Ok(Self::in_memory(jwt, bcrypt_cost, uploads)),
            StorageBackend::MongoDb => {
                let db = Database::connect(&database).await?;

                let persons = MongoPersonRepository::new(&db);
                let messages = MongoMessageRepository::new(&db);
                persons.ensure_indexes().await?;
                messages.ensure_indexes().await?;

                Ok(Self::new(
                    Arc::new(persons),
                    Arc::new(messages),
                    Arc::new(BcryptHashingService::new(bcrypt_cost)),
                    Arc::new(JwtTokenService::new(jwt)),
                    uploads,
                ))
            }
        }
    }
}

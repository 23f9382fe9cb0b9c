//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 저장소 선택, 프로필 사진 업로드, 비밀번호 해싱 비용을 관리합니다.

use std::env;
use std::path::PathBuf;
use super::env_or;

/// 실행 환경 구분
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        Self::from_str(
            &env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()),
        )
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// bcrypt 해싱 비용 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// `BCRYPT_COST` (4-15) 를 우선 사용하고, 범위를 벗어나면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
            log::warn!("BCRYPT_COST 값 '{}' 이 유효하지 않아 환경 기본값을 사용합니다", cost_str);
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env_or("PORT", 8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn workers() -> usize {
        env_or("WORKERS", 4)
    }

    /// CORS 허용 Origin 목록 (`CORS_ALLOWED_ORIGINS`, 콤마 구분)
    pub fn cors_allowed_origins() -> Vec<String> {
        let raw = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| {
            "http://localhost:3000,http://127.0.0.1:3000,http://localhost:8080,http://127.0.0.1:8080"
                .to_string()
        });

        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// 영속 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StorageBackend {
    /// MongoDB (운영 기본값)
    MongoDb,
    /// 프로세스 메모리 (개발/테스트용, 재시작 시 데이터 소실)
    Memory,
}

impl StorageBackend {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            _ => StorageBackend::MongoDb,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub backend: StorageBackend,
    pub uri: String,
    pub database_name: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            backend: StorageBackend::from_str(
                &env::var("STORAGE_BACKEND").unwrap_or_else(|_| "mongodb".to_string()),
            ),
            uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "persons_messages".to_string()),
        }
    }
}

/// 프로필 사진 업로드 정책
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// 사진 파일이 저장되는 디렉터리
    pub pictures_dir: PathBuf,
    /// 허용 최소 크기 (바이트)
    pub min_bytes: usize,
    /// 허용 최대 크기 (바이트)
    pub max_bytes: usize,
}

impl UploadConfig {
    pub const DEFAULT_MIN_BYTES: usize = 1024;
    pub const DEFAULT_MAX_BYTES: usize = 5 * 1024 * 1024;

    pub fn new(pictures_dir: impl Into<PathBuf>) -> Self {
        Self {
            pictures_dir: pictures_dir.into(),
            min_bytes: Self::DEFAULT_MIN_BYTES,
            max_bytes: Self::DEFAULT_MAX_BYTES,
        }
    }

    pub fn from_env() -> Self {
        Self::new(env::var("PICTURES_DIR").unwrap_or_else(|_| "pictures".to_string()))
    }
}

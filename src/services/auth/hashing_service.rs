//! 비밀번호 해싱 서비스
//!
//! bcrypt 기반의 단방향 해싱과 검증을 제공합니다.
//! 해싱은 CPU 집약적이므로 actix 의 blocking 스레드 풀에서 실행됩니다.

use async_trait::async_trait;
use actix_web::web;
use log::debug;
use crate::core::errors::AppError;

/// 비밀번호 해싱 추상화
#[async_trait]
pub trait HashingService: Send + Sync {
    /// 평문 비밀번호를 솔트가 포함된 해시로 변환
    async fn hash(&self, plaintext: &str) -> Result<String, AppError>;

    /// 평문과 해시 비교
    ///
    /// 해시 형식이 잘못된 경우에도 에러가 아닌 `false` 를 반환합니다.
    async fn compare(&self, plaintext: &str, hash: &str) -> Result<bool, AppError>;
}

/// bcrypt 구현체
///
/// cost 는 [`PasswordConfig::bcrypt_cost`](crate::config::PasswordConfig::bcrypt_cost) 로
/// 환경별로 결정됩니다. 개발/테스트 4, 스테이징 10, 운영 12.
#[derive(Debug, Clone)]
pub struct BcryptHashingService {
    cost: u32,
}

impl BcryptHashingService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

#[async_trait]
impl HashingService for BcryptHashingService {
    async fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;
        let start = std::time::Instant::now();

        let hashed = web::block(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 작업 실패: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        debug!("Password hashing took: {:?}", start.elapsed());
        Ok(hashed)
    }

    async fn compare(&self, plaintext: &str, hash: &str) -> Result<bool, AppError> {
        let plaintext = plaintext.to_owned();
        let hash = hash.to_owned();

        let verified = web::block(move || bcrypt::verify(plaintext, &hash))
            .await
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 작업 실패: {}", e)))?;

        // 잘못된 해시 형식은 불일치로 취급
        Ok(verified.unwrap_or(false))
    }
}

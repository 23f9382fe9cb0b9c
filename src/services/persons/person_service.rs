//! # 사용자 서비스
//!
//! 가입, 조회, 본인 정보 수정/삭제/비활성화, 프로필 사진 업로드를 담당합니다.
//!
//! ## 소유권 검사
//!
//! 변경 연산은 모두 같은 순서를 따릅니다.
//!
//! 1. 대상 조회 (없으면 `NotFound`)
//! 2. 인증된 사용자와 대상 비교 (다르면 `AuthorizationError`)
//! 3. 변경 후 저장
//!
//! 새 비밀번호 해싱은 소유권 확인 이후에 수행됩니다.

use std::path::PathBuf;
use std::sync::Arc;
use actix_web::web;
use log::{info, warn};
use mongodb::bson::oid::ObjectId;
use crate::config::UploadConfig;
use crate::core::errors::{AppError, ErrorContext};
use crate::domain::dto::persons::{
    CreatePersonRequest, PersonResponse, PictureFormat, PictureUpload, UpdatePersonRequest,
};
use crate::domain::entities::{parse_object_id, persons::Person};
use crate::domain::models::auth::AuthContext;
use crate::repositories::PersonRepository;
use crate::services::auth::HashingService;
use crate::utils::string_utils::normalize_email;

const PERSON_NOT_FOUND: &str = "Person not found";
const NOT_OWNER: &str = "You can only update your own data";

pub struct PersonService {
    persons: Arc<dyn PersonRepository>,
    hashing: Arc<dyn HashingService>,
    uploads: UploadConfig,
}

impl PersonService {
    pub fn new(
        persons: Arc<dyn PersonRepository>,
        hashing: Arc<dyn HashingService>,
        uploads: UploadConfig,
    ) -> Self {
        Self { persons, hashing, uploads }
    }

    /// 업로드 크기 제한과 저장 위치
    pub fn upload_limits(&self) -> &UploadConfig {
        &self.uploads
    }

    /// 새 사용자 가입
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이미 사용 중인 이메일
    pub async fn create(&self, request: CreatePersonRequest) -> Result<PersonResponse, AppError> {
        let password_hash = self.hashing.hash(&request.password).await?;
        let person = Person::new(normalize_email(&request.email), request.name, password_hash);

        let created = self.persons.insert(person).await?;
        info!("사용자 가입: {}", created.id);

        Ok(created.into())
    }

    /// 전체 사용자 목록 (최신순)
    pub async fn find_all(&self) -> Result<Vec<PersonResponse>, AppError> {
        let persons = self.persons.find_all().await?;
        Ok(persons.into_iter().map(PersonResponse::from).collect())
    }

    pub async fn find_one(&self, id: &str) -> Result<PersonResponse, AppError> {
        let id = parse_object_id(id)?;
        Ok(self.load(&id).await?.into())
    }

    /// 본인 이름/비밀번호 수정
    pub async fn update(
        &self,
        id: &str,
        request: UpdatePersonRequest,
        auth: &AuthContext,
    ) -> Result<PersonResponse, AppError> {
        let mut person = self.load_owned(id, auth).await?;

        // 변경할 필드가 없으면 저장하지 않음
        if request.is_empty() {
            return Ok(person.into());
        }

        if let Some(name) = request.name {
            person.name = name;
        }
        if let Some(password) = request.password {
            person.password_hash = self.hashing.hash(&password).await?;
        }
        person.touch();

        self.persons.save(&person).await?;
        info!("사용자 정보 수정: {}", person.id);

        Ok(person.into())
    }

    /// 본인 계정 삭제
    ///
    /// 보내거나 받은 쪽지와 프로필 사진도 함께 삭제됩니다.
    pub async fn remove(&self, id: &str, auth: &AuthContext) -> Result<(), AppError> {
        let person = self.load_owned(id, auth).await?;

        if !self.persons.delete(&person.id).await? {
            return Err(AppError::NotFound(PERSON_NOT_FOUND.to_string()));
        }

        if !person.picture.is_empty() {
            let dir = self.uploads.pictures_dir.clone();
            if let Err(e) = remove_pictures(dir, vec![person.picture.clone()]).await {
                warn!("프로필 사진 삭제 실패: {} ({})", person.id, e);
            }
        }

        info!("사용자 삭제: {}", person.id);
        Ok(())
    }

    /// 본인 계정 비활성화
    ///
    /// 비활성화된 사용자는 로그인, 토큰 갱신, 인증이 모두 거부됩니다.
    pub async fn deactivate(&self, id: &str, auth: &AuthContext) -> Result<PersonResponse, AppError> {
        let mut person = self.load_owned(id, auth).await?;

        person.active = false;
        person.touch();
        self.persons.save(&person).await?;

        info!("사용자 비활성화: {}", person.id);
        Ok(person.into())
    }

    /// 프로필 사진 업로드
    ///
    /// 파일은 `<PICTURES_DIR>/<person id>.<ext>` 에 저장되며 기존 파일을 덮어씁니다.
    /// 다른 확장자로 저장된 이전 사진은 삭제됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 크기 범위 밖이거나 JPEG/PNG 가 아닌 경우
    pub async fn upload_picture(
        &self,
        upload: PictureUpload,
        auth: &AuthContext,
    ) -> Result<PersonResponse, AppError> {
        if upload.len() < self.uploads.min_bytes {
            return Err(AppError::ValidationError("File size is too small".to_string()));
        }
        if upload.len() > self.uploads.max_bytes {
            return Err(AppError::ValidationError("File size is too large".to_string()));
        }
        let format = upload.format().ok_or_else(|| {
            AppError::ValidationError("Only JPEG and PNG images are allowed".to_string())
        })?;

        let mut person = self.load(&auth.person_id()).await?;

        let file_name = format!("{}.{}", person.id_string(), format.extension());
        let path = self.uploads.pictures_dir.join(&file_name);
        write_picture(path, upload.bytes).await?;

        let stale: Vec<String> = PictureFormat::ALL
            .iter()
            .filter(|other| **other != format)
            .map(|other| format!("{}.{}", person.id_string(), other.extension()))
            .collect();
        if let Err(e) = remove_pictures(self.uploads.pictures_dir.clone(), stale).await {
            warn!("이전 프로필 사진 삭제 실패: {} ({})", person.id, e);
        }

        person.picture = file_name;
        person.touch();
        self.persons.save(&person).await?;

        info!("프로필 사진 저장: {} ({})", person.id, person.picture);
        Ok(person.into())
    }

    async fn load(&self, id: &ObjectId) -> Result<Person, AppError> {
        self.persons
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(PERSON_NOT_FOUND.to_string()))
    }

    async fn load_owned(&self, id: &str, auth: &AuthContext) -> Result<Person, AppError> {
        let id = parse_object_id(id)?;
        let person = self.load(&id).await?;

        if !auth.owns(&person.id) {
            warn!("다른 사용자 변경 시도: {} -> {}", auth.person_id(), person.id);
            return Err(AppError::AuthorizationError(NOT_OWNER.to_string()));
        }
        Ok(person)
    }
}

async fn write_picture(path: PathBuf, bytes: Vec<u8>) -> Result<(), AppError> {
    let target = path.display().to_string();

    web::block(move || -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, bytes)
    })
    .await
    .context("사진 저장 작업 실패")?
    .with_context(|| format!("사진 파일 쓰기 실패: {}", target))
}

/// 사진 디렉터리에서 주어진 파일들을 삭제합니다. 없는 파일은 무시합니다.
async fn remove_pictures(dir: PathBuf, file_names: Vec<String>) -> Result<(), AppError> {
    web::block(move || -> std::io::Result<()> {
        for file_name in file_names {
            match std::fs::remove_file(dir.join(&file_name)) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    })
    .await
    .context("사진 삭제 작업 실패")?
    .context("사진 파일 삭제 실패")
}

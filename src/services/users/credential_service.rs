//! # 자격 증명 서비스 구현
//!
//! 회원가입과 로그인 요청의 핵심 비즈니스 로직을 구현합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │               CredentialService               │
//! │                                               │
//! │  ┌──────────────────┐  ┌───────────────────┐  │
//! │  │   Registration   │  │   Authentication  │  │
//! │  │ • Password Hash  │  │ • Lookup by Email │  │
//! │  │ • Duplicate Chk  │  │ • Password Verify │  │
//! │  │ • Insert+Commit  │  │ • Enrolled Course │  │
//! │  └──────────────────┘  └───────────────────┘  │
//! └───────────────────────────────────────────────┘
//!              │                      │
//!              ▼                      ▼
//! ┌───────────────────────┐ ┌─────────────────────┐
//! │    PasswordService    │ │   CredentialStore   │
//! │ • bcrypt (block pool) │ │ • PostgreSQL (sqlx) │
//! └───────────────────────┘ └─────────────────────┘
//! ```
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 환경별 cost, 비밀번호마다 새 솔트
//! - **균일한 인증 실패**: 없는 이메일과 틀린 비밀번호 모두 `InvalidCredentials`,
//!   없는 이메일도 더미 해시 검증을 거쳐 응답 시간 차이를 줄임
//! - **저장소 에러 비노출**: 설정에 따라 500 응답 본문에서 원문 메시지 제거

use std::sync::Arc;
use std::time::Instant;

use log::{debug, error, info, warn};

use crate::config::AppConfig;
use crate::domain::dto::users::{LoginCredentials, RegisterCredentials, UserProfileResponse};
use crate::domain::entities::users::NewUser;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::{CredentialStore, StoreError};
use crate::services::auth::PasswordService;

/// 저장소 에러 메시지를 숨길 때 사용하는 응답 문구
const REDACTED_STORAGE_ERROR: &str = "Internal server error";

/// 회원가입/로그인 비즈니스 로직 서비스
///
/// 저장소는 [`CredentialStore`] trait 객체로 주입되므로
/// 운영 환경에서는 PostgreSQL, 테스트에서는 인메모리 구현을 사용합니다.
pub struct CredentialService {
    store: Arc<dyn CredentialStore>,
    passwords: PasswordService,
    expose_storage_errors: bool,
    retain_plain_password: bool,
}

impl CredentialService {
    /// 기본 옵션(저장소 에러 노출, 원문 비밀번호 미보관)으로 서비스를 생성합니다.
    pub fn new(store: Arc<dyn CredentialStore>, passwords: PasswordService) -> Self {
        Self {
            store,
            passwords,
            expose_storage_errors: true,
            retain_plain_password: false,
        }
    }

    /// 애플리케이션 설정으로부터 서비스를 구성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - bcrypt cost가 잘못된 경우
    pub fn from_config(store: Arc<dyn CredentialStore>, config: &AppConfig) -> AppResult<Self> {
        let passwords = PasswordService::new(config.password.bcrypt_cost)?;

        Ok(Self::new(store, passwords)
            .with_storage_error_exposure(config.expose_storage_errors)
            .with_plain_password_retention(config.retain_plain_password))
    }

    /// 500 응답 본문에 저장소 에러 원문을 포함할지 설정합니다.
    pub fn with_storage_error_exposure(mut self, expose: bool) -> Self {
        self.expose_storage_errors = expose;
        self
    }

    /// 레거시 `plain_password` 컬럼 기록 여부를 설정합니다.
    pub fn with_plain_password_retention(mut self, retain: bool) -> Self {
        self.retain_plain_password = retain;
        self
    }

    /// 새 사용자 계정 생성
    ///
    /// # 처리 과정
    ///
    /// 1. **비밀번호 해싱**: 저장소 접근 전에 bcrypt 해시 계산
    /// 2. **중복 검사 + 저장**: 저장소 트랜잭션 안에서 이메일 조회 후 삽입, 커밋
    /// 3. **응답 생성**: 수강 강의가 없는 프로필 반환
    ///
    /// # 반환값
    ///
    /// * `Ok(UserProfileResponse)` - `enrolled_courses`는 항상 비어 있음
    /// * `Err(AppError::DuplicateEmail)` - 이미 가입된 이메일
    /// * `Err(AppError::StorageError)` - 저장소 실패 (트랜잭션 롤백됨)
    /// * `Err(AppError::InternalError)` - 해싱 실패
    pub async fn register(&self, credentials: RegisterCredentials) -> AppResult<UserProfileResponse> {
        let start_time = Instant::now();

        let RegisterCredentials {
            username,
            email,
            password,
        } = credentials;

        let plain_password = self.retain_plain_password.then(|| password.clone());
        let password_hash = self.passwords.hash(password).await?;

        let new_user = NewUser {
            username,
            email,
            password_hash,
            plain_password,
        };

        let created_user = self
            .store
            .insert_unique(new_user)
            .await
            .map_err(|e| self.map_store_error(e))?;

        info!("회원가입 완료 - 사용자 ID: {}", created_user.id);
        debug!("Total registration took: {:?}", start_time.elapsed());

        Ok(UserProfileResponse::from(created_user))
    }

    /// 이메일/비밀번호 로그인
    ///
    /// 존재하지 않는 이메일과 틀린 비밀번호는 구분되지 않는
    /// `AppError::InvalidCredentials`로 처리됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(UserProfileResponse)` - 사용자 정보와 `course_id` 오름차순 수강 목록
    /// * `Err(AppError::InvalidCredentials)` - 인증 실패
    /// * `Err(AppError::StorageError)` - 저장소 실패
    pub async fn login(&self, credentials: LoginCredentials) -> AppResult<UserProfileResponse> {
        let start_time = Instant::now();

        let LoginCredentials { email, password } = credentials;

        let user = self
            .store
            .find_by_email(&email)
            .await
            .map_err(|e| self.map_store_error(e))?;

        let stored_hash = user.as_ref().map(|user| user.password.clone());
        let verified = self.passwords.verify(password, stored_hash).await?;

        let user = match user {
            Some(user) if verified => user,
            _ => {
                warn!("로그인 실패 - 잘못된 자격 증명");
                return Err(AppError::InvalidCredentials);
            }
        };

        let enrolled_courses = self
            .store
            .enrolled_course_ids(user.id)
            .await
            .map_err(|e| self.map_store_error(e))?;

        info!(
            "로그인 성공 - 사용자 ID: {}, 수강 강의 {}개",
            user.id,
            enrolled_courses.len()
        );
        debug!("Total login took: {:?}", start_time.elapsed());

        Ok(UserProfileResponse::new(user, enrolled_courses))
    }

    fn map_store_error(&self, err: StoreError) -> AppError {
        match err {
            StoreError::DuplicateEmail => {
                info!("회원가입 거부 - 이미 가입된 이메일");
                AppError::DuplicateEmail
            }
            StoreError::Database(message) => {
                error!("저장소 오류: {}", message);
                if self.expose_storage_errors {
                    AppError::StorageError(message)
                } else {
                    AppError::StorageError(REDACTED_STORAGE_ERROR.to_string())
                }
            }
        }
    }
}

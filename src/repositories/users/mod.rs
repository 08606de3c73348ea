//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`CredentialStore`]는 자격 증명 서비스가 사용하는 저장소 포트이고,
//! [`UserRepository`](user_repo::UserRepository)가 PostgreSQL 구현체입니다.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::users::{NewUser, User};

pub mod user_repo;

pub use user_repo::UserRepository;

/// 저장소 계층 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// 같은 이메일의 사용자가 이미 존재
    ///
    /// 사전 조회와 유니크 제약 위반 양쪽에서 발생합니다.
    #[error("email already registered")]
    DuplicateEmail,

    /// 연결, 쿼리, 트랜잭션 등 그 밖의 모든 저장소 실패
    #[error("{0}")]
    Database(String),
}

/// 사용자 자격 증명 저장소
///
/// 구현체는 호출마다 연결을 빌리고 반환 전에 반드시 반납해야 합니다.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// 이메일이 중복되지 않을 때만 사용자를 저장하고 저장된 행을 반환합니다.
    ///
    /// 조회와 삽입은 하나의 트랜잭션에서 수행되며, 실패 시 롤백됩니다.
    async fn insert_unique(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// 이메일로 사용자를 조회합니다.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// 사용자가 수강 중인 강의 ID를 `course_id` 오름차순으로 반환합니다.
    async fn enrolled_course_ids(&self, user_id: i32) -> Result<Vec<i32>, StoreError>;
}

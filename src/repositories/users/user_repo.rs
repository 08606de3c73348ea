//! # 사용자 리포지토리 구현
//!
//! `users`, `enrollments` 테이블에 대한 PostgreSQL 데이터 액세스 계층입니다.
//!
//! ## 특징
//!
//! - **스코프 기반 연결 관리**: 모든 메서드는 풀에서 연결/트랜잭션을 빌리고
//!   반환 시점(성공, 에러 모두)에 drop으로 반납합니다.
//! - **트랜잭션 가입 처리**: 이메일 중복 조회와 삽입을 하나의 트랜잭션으로 묶습니다.
//! - **데이터 무결성**: `users_email_key` 유니크 제약 위반을 중복 이메일로 변환해
//!   동시 가입 경쟁 상태를 막습니다.

use async_trait::async_trait;
use log::{debug, warn};

use super::{CredentialStore, StoreError};
use crate::db::Database;
use crate::domain::entities::enrollments::Enrollment;
use crate::domain::entities::users::{NewUser, User};

/// PostgreSQL 유니크 제약 위반 SQLSTATE
const UNIQUE_VIOLATION: &str = "23505";

const SELECT_EMAIL: &str = "SELECT email FROM users WHERE email = $1";

// role은 TEXT/enum 컬럼 모두 읽을 수 있도록 text로 캐스팅
const INSERT_USER: &str = "\
    INSERT INTO users (username, email, password) \
    VALUES ($1, $2, $3) \
    RETURNING id, username, email, password, role::text AS role";

const INSERT_USER_WITH_PLAIN_PASSWORD: &str = "\
    INSERT INTO users (username, email, password, plain_password) \
    VALUES ($1, $2, $3, $4) \
    RETURNING id, username, email, password, role::text AS role";

const SELECT_USER_BY_EMAIL: &str =
    "SELECT id, username, email, password, role::text AS role FROM users WHERE email = $1";

// 응답의 강의 순서는 삽입 순서가 아니라 course_id 오름차순으로 고정
const SELECT_ENROLLMENTS: &str =
    "SELECT user_id, course_id FROM enrollments WHERE user_id = $1 ORDER BY course_id";

/// PostgreSQL 기반 사용자 리포지토리
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(database);
///
/// let created = repo.insert_unique(new_user).await?;
/// let found = repo.find_by_email("john@example.com").await?;
/// let courses = repo.enrolled_course_ids(created.id).await?;
/// ```
#[derive(Clone)]
pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialStore for UserRepository {
    /// 새 사용자 생성
    ///
    /// 1. 트랜잭션 시작
    /// 2. 같은 이메일 조회, 존재하면 롤백 후 `DuplicateEmail`
    /// 3. 삽입 후 `RETURNING`으로 생성된 행 조회
    /// 4. 커밋
    ///
    /// `?`로 빠져나가는 모든 경로에서 커밋되지 않은 트랜잭션은 drop 시 롤백됩니다.
    async fn insert_unique(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut tx = self.db.begin().await?;

        let existing: Option<String> = sqlx::query_scalar(SELECT_EMAIL)
            .bind(&new_user.email)
            .fetch_optional(&mut *tx)
            .await?;

        if existing.is_some() {
            tx.rollback().await?;
            return Err(StoreError::DuplicateEmail);
        }

        let created = match &new_user.plain_password {
            Some(plain_password) => {
                sqlx::query_as::<_, User>(INSERT_USER_WITH_PLAIN_PASSWORD)
                    .bind(&new_user.username)
                    .bind(&new_user.email)
                    .bind(&new_user.password_hash)
                    .bind(plain_password)
                    .fetch_one(&mut *tx)
                    .await?
            }
            None => {
                sqlx::query_as::<_, User>(INSERT_USER)
                    .bind(&new_user.username)
                    .bind(&new_user.email)
                    .bind(&new_user.password_hash)
                    .fetch_one(&mut *tx)
                    .await?
            }
        };

        tx.commit().await?;
        debug!("users 행 생성: id={}", created.id);

        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let mut conn = self.db.acquire().await?;

        let user = sqlx::query_as::<_, User>(SELECT_USER_BY_EMAIL)
            .bind(email)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(user)
    }

    async fn enrolled_course_ids(&self, user_id: i32) -> Result<Vec<i32>, StoreError> {
        let mut conn = self.db.acquire().await?;

        let enrollments = sqlx::query_as::<_, Enrollment>(SELECT_ENROLLMENTS)
            .bind(user_id)
            .fetch_all(&mut *conn)
            .await?;

        Ok(enrollments
            .into_iter()
            .map(|enrollment| enrollment.course_id)
            .collect())
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let duplicate = err.as_database_error().is_some_and(|db_err| {
            is_duplicate_email(db_err.code().as_deref(), db_err.constraint())
        });

        if duplicate {
            warn!("이메일 유니크 제약 위반 감지 (동시 가입 경쟁)");
            StoreError::DuplicateEmail
        } else {
            StoreError::Database(err.to_string())
        }
    }
}

/// 유니크 제약 위반 중 이메일 제약에 해당하는지 판별합니다.
///
/// 제약 이름을 알 수 없으면 이메일 중복으로 간주합니다.
fn is_duplicate_email(code: Option<&str>, constraint: Option<&str>) -> bool {
    code == Some(UNIQUE_VIOLATION) && constraint.is_none_or(|name| name.contains("email"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_on_email_constraint() {
        assert!(is_duplicate_email(Some("23505"), Some("users_email_key")));
        assert!(is_duplicate_email(Some("23505"), None));
    }

    #[test]
    fn test_other_violations_are_not_duplicates() {
        assert!(!is_duplicate_email(Some("23505"), Some("users_username_key")));
        assert!(!is_duplicate_email(Some("23503"), Some("enrollments_user_id_fkey")));
        assert!(!is_duplicate_email(None, None));
    }

    #[test]
    fn test_role_is_read_as_text() {
        for sql in [INSERT_USER, INSERT_USER_WITH_PLAIN_PASSWORD, SELECT_USER_BY_EMAIL] {
            assert!(sql.contains("role::text AS role"), "{}", sql);
        }
    }

    #[test]
    fn test_non_database_error_maps_to_storage_error() {
        let err = StoreError::from(sqlx::Error::RowNotFound);

        assert!(matches!(err, StoreError::Database(_)));
    }
}

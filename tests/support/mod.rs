//! PostgreSQL 통합 테스트 공용 픽스처
//!
//! `TEST_DATABASE_URL`이 가리키는 서버에 테스트마다 새 스키마를 만들고,
//! 그 스키마를 `search_path`로 고정한 풀 위에 마이그레이션을 적용합니다.
//! 변수가 없으면 테스트는 건너뛰고, 설정되어 있는데 준비에 실패하면 panic 합니다.

#![allow(dead_code)]

use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use course_auth_service::db::Database;
use course_auth_service::domain::NewUser;
use course_auth_service::repositories::users::UserRepository;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

static SCHEMA_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// 테스트 데이터베이스 URL. 비어 있으면 `None`.
pub fn test_database_url() -> Option<String> {
    std::env::var("TEST_DATABASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
}

pub struct TestContext {
    pub database: Database,
    pub repository: UserRepository,
    admin: PgPool,
    schema: String,
}

impl TestContext {
    /// 격리된 스키마를 준비합니다.
    ///
    /// `max_connections`는 테스트 대상 풀의 크기입니다.
    pub async fn setup(test_name: &str, max_connections: u32) -> Option<Self> {
        let Some(url) = test_database_url() else {
            eprintln!("SKIP-TEST-DATABASE: {test_name} skipped (TEST_DATABASE_URL not set)");
            return None;
        };

        match Self::try_setup(&url, max_connections).await {
            Ok(context) => Some(context),
            Err(reason) => panic!("Test database setup failed: {reason}. Unset TEST_DATABASE_URL to skip."),
        }
    }

    async fn try_setup(url: &str, max_connections: u32) -> Result<Self, String> {
        let schema = format!(
            "course_auth_test_{}_{}",
            std::process::id(),
            SCHEMA_COUNTER.fetch_add(1, Ordering::SeqCst)
        );

        let admin = PgPool::connect(url).await.map_err(|e| e.to_string())?;
        sqlx::query(&format!(r#"CREATE SCHEMA "{schema}""#))
            .execute(&admin)
            .await
            .map_err(|e| e.to_string())?;

        let options = PgConnectOptions::from_str(url)
            .map_err(|e| e.to_string())?
            .options([("search_path", schema.as_str())]);
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(options)
            .await
            .map_err(|e| e.to_string())?;

        let database = Database::from_pool(pool, schema.clone());
        database.migrate().await.map_err(|e| e.to_string())?;

        Ok(Self {
            repository: UserRepository::new(database.clone()),
            database,
            admin,
            schema,
        })
    }

    /// 테스트 스키마에서 SQL 한 문장을 실행합니다.
    pub async fn execute(&self, sql: &str) {
        let mut conn = self.database.acquire().await.expect("acquire connection");
        sqlx::query(sql)
            .execute(&mut *conn)
            .await
            .unwrap_or_else(|e| panic!("`{sql}` failed: {e}"));
    }

    pub async fn count_users(&self, email: &str) -> i64 {
        let mut conn = self.database.acquire().await.expect("acquire connection");
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(email)
            .fetch_one(&mut *conn)
            .await
            .expect("count users")
    }

    pub async fn enroll(&self, user_id: i32, course_id: i32) {
        let mut conn = self.database.acquire().await.expect("acquire connection");
        sqlx::query("INSERT INTO enrollments (user_id, course_id) VALUES ($1, $2)")
            .bind(user_id)
            .bind(course_id)
            .execute(&mut *conn)
            .await
            .expect("insert enrollment");
    }

    pub async fn teardown(self) {
        self.database.close().await;
        let _ = sqlx::query(&format!(r#"DROP SCHEMA "{}" CASCADE"#, self.schema))
            .execute(&self.admin)
            .await;
        self.admin.close().await;
    }
}

pub fn new_user(email: &str) -> NewUser {
    NewUser {
        username: "kim".to_string(),
        email: email.to_string(),
        password_hash: "$2b$04$abcdefghijklmnopqrstuuK3cgmzQF1Q1q8fiUeqY0uWzRYKxKSW".to_string(),
        plain_password: None,
    }
}

//! Database Connection Management Module
//!
//! PostgreSQL 연결 풀 관리를 담당하는 모듈입니다.
//! 요청마다 풀에서 연결 또는 트랜잭션을 빌려 쓰고,
//! 스코프를 벗어나면 반드시 반납되도록 RAII 핸들만 노출합니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! export DB_NAME="courses"
//! export DB_USER="app"
//! export DB_PASS="secret"
//! export DB_HOST="db.example.com"
//! export DB_PORT="5432"
//! export SSL_ROOT_CERT="/etc/ssl/certs/root.crt"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Database::connect(&config.database).await?;
//! let mut tx = database.begin().await?;
//! // ... 쿼리 실행
//! tx.commit().await?;
//! ```

use log::info;
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, Transaction};

use crate::config::DatabaseConfig;

/// PostgreSQL 연결 풀 래퍼
///
/// 내부 `PgPool`은 참조 카운팅되므로 복제 비용이 작습니다.
#[derive(Clone)]
pub struct Database {
    /// sqlx 연결 풀
    pool: PgPool,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 PostgreSQL 연결 풀을 생성합니다.
    ///
    /// 설정의 TLS 모드와 루트 인증서로 연결하고, 첫 연결로 상태를 검증합니다.
    ///
    /// # Errors
    ///
    /// * 연결 실패, TLS 검증 실패, 인증 실패 시 `sqlx::Error`
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(config.connect_options())
            .await?;

        info!("✅ PostgreSQL 연결 성공: {}@{}", config.name, config.host);

        Ok(Self {
            pool,
            database_name: config.name.clone(),
        })
    }

    /// 이미 구성된 풀을 감쌉니다.
    ///
    /// 통합 테스트처럼 연결 옵션을 직접 조립하는 경우에 사용합니다.
    pub fn from_pool(pool: PgPool, database_name: impl Into<String>) -> Self {
        Self {
            pool,
            database_name: database_name.into(),
        }
    }

    /// 풀에서 연결 하나를 빌립니다.
    ///
    /// 반환된 연결은 drop 시점에 풀로 돌아갑니다.
    pub async fn acquire(&self) -> Result<PoolConnection<Postgres>, sqlx::Error> {
        self.pool.acquire().await
    }

    /// 새 트랜잭션을 시작합니다.
    ///
    /// `commit()` 없이 drop되면 롤백되고 연결은 풀로 반납됩니다.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }

    /// `migrations/` 디렉터리의 스키마 마이그레이션을 적용합니다.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("✅ 마이그레이션 적용 완료: {}", self.database_name);
        Ok(())
    }

    /// 풀을 닫고 모든 연결을 정리합니다.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}

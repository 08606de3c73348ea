//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 및 보안 관련 설정을 관리합니다.
//! 모든 값은 [`AppConfig::from_env`]에서 한 번만 읽어 구조체로 고정되며,
//! 이후에는 참조로만 전달됩니다.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use thiserror::Error;

/// 설정 로드 실패
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 필수 환경 변수 누락
    #[error("필수 환경 변수가 설정되지 않았습니다: {0}")]
    Missing(&'static str),

    /// 환경 변수 값 파싱 실패
    #[error("환경 변수 {key} 값이 올바르지 않습니다: {value}")]
    Invalid { key: &'static str, value: String },
}

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 값을 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Self {
        let name = lookup("ENVIRONMENT")
            .or_else(|| lookup("NODE_ENV"))
            .unwrap_or_else(|| "production".to_string());

        Self::from_name(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    /// bcrypt cost (4-15)
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }

    fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>, env: &Environment) -> Self {
        // 범위를 벗어난 BCRYPT_COST는 무시하고 환경 기본값을 사용
        let bcrypt_cost = lookup("BCRYPT_COST")
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(env));

        Self { bcrypt_cost }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 호스트 주소. 기본값: "0.0.0.0"
    pub host: String,
    /// 포트 번호. 기본값: 5000
    pub port: u16,
    /// 워커 스레드 수. 기본값: 4
    pub workers: usize,
}

impl ServerConfig {
    fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(lookup, "PORT", 5000)?,
            workers: parse_or(lookup, "WORKERS", 4)?,
        })
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// PostgreSQL 연결 설정
///
/// ## 환경 변수
/// - `DB_NAME`, `DB_USER`, `DB_PASS`, `DB_HOST`: 필수
/// - `DB_PORT`: 기본값 5432
/// - `DB_SSL_MODE`: 기본값 `verify-full`
/// - `SSL_ROOT_CERT`: 서버 인증서 검증용 CA 경로
/// - `DB_MAX_CONNECTIONS`: 풀 최대 연결 수 (기본값 10)
/// - `DB_ACQUIRE_TIMEOUT_SECS`: 풀 대기 시간 (기본값 5초)
/// - `DB_STATEMENT_TIMEOUT_MS`: 쿼리 타임아웃 (기본값 5000ms)
/// - `DB_RUN_MIGRATIONS`: 시작 시 마이그레이션 실행 여부 (기본값 false)
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub name: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub ssl_mode: PgSslMode,
    pub ssl_root_cert: Option<PathBuf>,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub statement_timeout: Duration,
    pub run_migrations: bool,
}

impl DatabaseConfig {
    fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let ssl_mode = match lookup("DB_SSL_MODE") {
            Some(raw) => parse_ssl_mode(&raw).ok_or(ConfigError::Invalid {
                key: "DB_SSL_MODE",
                value: raw,
            })?,
            None => PgSslMode::VerifyFull,
        };

        Ok(Self {
            name: required(lookup, "DB_NAME")?,
            user: required(lookup, "DB_USER")?,
            password: required(lookup, "DB_PASS")?,
            host: required(lookup, "DB_HOST")?,
            port: parse_or(lookup, "DB_PORT", 5432)?,
            ssl_mode,
            ssl_root_cert: lookup("SSL_ROOT_CERT").map(PathBuf::from),
            max_connections: parse_or(lookup, "DB_MAX_CONNECTIONS", 10)?,
            acquire_timeout: Duration::from_secs(parse_or(lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5)?),
            statement_timeout: Duration::from_millis(parse_or(
                lookup,
                "DB_STATEMENT_TIMEOUT_MS",
                5000,
            )?),
            run_migrations: parse_or(lookup, "DB_RUN_MIGRATIONS", false)?,
        })
    }

    /// sqlx 연결 옵션을 생성합니다.
    ///
    /// TLS 모드와 루트 인증서, `statement_timeout`이 모든 연결에 적용됩니다.
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(self.ssl_mode)
            .application_name("course_auth_service")
            .options([(
                "statement_timeout",
                format!("{}ms", self.statement_timeout.as_millis()),
            )]);

        match &self.ssl_root_cert {
            Some(path) => options.ssl_root_cert(path),
            None => options,
        }
    }
}

/// CORS 설정
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// 허용할 Origin 목록. 기본값: `http://localhost:5173`
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Self {
        let allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_else(|| vec!["http://localhost:5173".to_string()]);

        Self { allowed_origins }
    }
}

/// 프로세스 시작 시 한 번 생성되는 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub password: PasswordConfig,
    pub cors: CorsConfig,
    /// 저장소 에러 원문을 클라이언트에 노출할지 여부
    ///
    /// `EXPOSE_STORAGE_ERRORS`로 지정하며, 기본값은 Production에서만 false입니다.
    pub expose_storage_errors: bool,
    /// 레거시 `plain_password` 컬럼에 원문 비밀번호를 기록할지 여부
    ///
    /// 보안상 위험한 호환성 옵션입니다. 기본값 false.
    pub retain_plain_password: bool,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    ///
    /// # Errors
    ///
    /// 필수 DB 변수가 없거나 숫자/불리언 값이 잘못된 경우 [`ConfigError`]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수로부터 설정을 구성합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_lookup(&lookup);
        let default_expose = environment != Environment::Production;

        Ok(Self {
            server: ServerConfig::from_lookup(&lookup)?,
            database: DatabaseConfig::from_lookup(&lookup)?,
            password: PasswordConfig::from_lookup(&lookup, &environment),
            cors: CorsConfig::from_lookup(&lookup),
            expose_storage_errors: parse_or(&lookup, "EXPOSE_STORAGE_ERRORS", default_expose)?,
            retain_plain_password: parse_or(&lookup, "RETAIN_PLAIN_PASSWORD", false)?,
            environment,
        })
    }
}

fn required(
    lookup: &dyn Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<String, ConfigError> {
    lookup(key).ok_or(ConfigError::Missing(key))
}

fn parse_or<T: std::str::FromStr>(
    lookup: &dyn Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}

fn parse_ssl_mode(raw: &str) -> Option<PgSslMode> {
    match raw.trim().to_lowercase().as_str() {
        "disable" => Some(PgSslMode::Disable),
        "allow" => Some(PgSslMode::Allow),
        "prefer" => Some(PgSslMode::Prefer),
        "require" => Some(PgSslMode::Require),
        "verify-ca" => Some(PgSslMode::VerifyCa),
        "verify-full" => Some(PgSslMode::VerifyFull),
        _ => None,
    }
}

//! 강의 플랫폼 인증 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! PostgreSQL 연결을 설정하고 회원가입/로그인 REST API를 제공합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use course_auth_service::config::{AppConfig, CorsConfig};
use course_auth_service::core::AppState;
use course_auth_service::db::Database;
use course_auth_service::repositories::users::UserRepository;
use course_auth_service::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // .env의 RUST_LOG가 적용되도록 env 파일은 로거보다 먼저 로드
    let env_file = load_env_file();
    init_logging();

    info!("🚀 강의 플랫폼 인증 서비스 시작중...");
    match env_file {
        Ok(file) => info!("{} 파일 로드 됨", file),
        Err(e) => warn!("env 파일 로드 실패, 프로세스 환경 변수만 사용합니다: {}", e),
    }

    let config = AppConfig::from_env().map_err(|e| {
        error!("설정 로드 실패: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("🔧 실행 환경: {:?}", config.environment);

    // 데이터 스토어 초기화
    let database = initialize_database(&config).await?;

    if config.retain_plain_password {
        warn!("⚠️ RETAIN_PLAIN_PASSWORD 활성화됨: 원문 비밀번호가 plain_password 컬럼에 기록됩니다");
    }

    let store = Arc::new(UserRepository::new(database.clone()));
    let state = AppState::from_config(&config, store).map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    let result = start_http_server(&config, state).await;

    database.close().await;
    info!("👋 데이터베이스 연결 풀 종료");

    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(config: &AppConfig, state: AppState) -> io::Result<()> {
    let bind_address = config.server.bind_address();
    let cors_config = config.cors.clone();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/register, /api/login", bind_address);

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors(&cors_config);

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(web::Data::new(state.clone()))
            // 라우트 설정
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(config.server.workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드하고, 로드한 파일 이름을 반환합니다.
/// 로거 초기화 전에 호출되므로 결과 로그는 호출자가 남깁니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() -> Result<&'static str, dotenv::Error> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match env_file_for_profile(&profile) {
        Some(file) => dotenv::from_filename(file).map(|_| file),
        None => dotenv().map(|_| ".env"),
    }
}

/// 프로필별 env 파일 이름. `None`이면 기본 `.env` 탐색을 사용합니다.
fn env_file_for_profile(profile: &str) -> Option<&'static str> {
    match profile {
        "prod" => Some(".env.prod"),
        "dev" => Some(".env.dev"),
        _ => None,
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// # Examples
///
/// ```bash
/// # 서비스 계층만 debug (해싱/검증 소요 시간 출력)
/// RUST_LOG=course_auth_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// PostgreSQL 연결 풀을 초기화하고 필요하면 마이그레이션을 적용합니다
///
/// # Errors
///
/// * 연결 실패 또는 마이그레이션 실패 시 `io::Error`
async fn initialize_database(config: &AppConfig) -> io::Result<Database> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::connect(&config.database).await.map_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
        io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
    })?;

    if config.database.run_migrations {
        database.migrate().await.map_err(|e| {
            error!("마이그레이션 실패: {}", e);
            io::Error::other(e.to_string())
        })?;
    }

    info!("🗄️ 사용 데이터베이스: {}", database.database_name());
    Ok(database)
}

/// CORS 설정을 구성합니다
///
/// 설정된 프론트엔드 Origin에서의 JSON POST 요청을 허용합니다.
///
/// # Allowed Origins
///
/// * `CORS_ALLOWED_ORIGINS` (쉼표 구분), 기본값 `http://localhost:5173`
fn configure_cors(config: &CorsConfig) -> Cors {
    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_file_for_profile() {
        assert_eq!(env_file_for_profile("dev"), Some(".env.dev"));
        assert_eq!(env_file_for_profile("prod"), Some(".env.prod"));
        assert_eq!(env_file_for_profile("staging"), None);
    }
}

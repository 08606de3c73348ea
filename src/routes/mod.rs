//! API 라우트 설정 모듈
//!
//! 인증 API 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET` | `/health` | [`health_check`] |
//! | `POST` | `/api/register` | [`handlers::auth::register`] |
//! | `POST` | `/api/login` | [`handlers::auth::login`] |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes);
//! ```

use actix_web::web;
use log::debug;
use serde_json::json;

use crate::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// 모든 인증 라우트는 Public 접근이 가능합니다.
/// JSON 파싱 실패는 actix 기본 응답 대신 `{"error": ...}` 형식의 400으로 변환됩니다.
///
/// # Examples
///
/// ```bash
/// # 회원가입
/// curl -X POST http://localhost:5000/api/register \
///   -H "Content-Type: application/json" \
///   -d '{"username":"kim","email":"new@x.com","password":"pw"}'
///
/// # 로그인
/// curl -X POST http://localhost:5000/api/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"new@x.com","password":"pw"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .service(handlers::auth::register)
            .service(handlers::auth::login),
    );
}

/// 요청 본문 추출 설정
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!("요청 본문 파싱 실패: {}", err);
        AppError::MalformedPayload(err.to_string()).into()
    })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:5000/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "course_auth_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "features": {
///     "database": "PostgreSQL",
///     "password_hashing": "bcrypt"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "PostgreSQL",
            "password_hashing": "bcrypt"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["features"]["database"], "PostgreSQL");
    }
}

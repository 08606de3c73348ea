//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 프로세스 시작 시 한 번 읽어
//! [`AppConfig`] 구조체로 고정하고, 이후에는 참조로만 전달합니다.
//! 전역 가변 상태는 두지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("Server will bind to {}", config.server.bind_address());
//! println!("bcrypt cost: {}", config.password.bcrypt_cost);
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수
//!
//! ```bash
//! export DB_NAME="courses"
//! export DB_USER="app"
//! export DB_PASS="secret"
//! export DB_HOST="db.example.com"
//! export SSL_ROOT_CERT="/etc/ssl/certs/root.crt"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"   # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="5000"
//! export BCRYPT_COST="12"          # 4-15 범위
//! export CORS_ALLOWED_ORIGINS="http://localhost:5173"
//! export EXPOSE_STORAGE_ERRORS="false"
//! export RETAIN_PLAIN_PASSWORD="false"
//! ```

pub mod data_config;

pub use data_config::*;

//! # Core Module
//!
//! 애플리케이션 전역에서 공유되는 상태를 정의합니다.
//!
//! ## 구성
//!
//! ### [`state`] - 애플리케이션 상태
//! - **AppState**: 핸들러가 `web::Data<AppState>`로 받아 쓰는 서비스 묶음
//! - 서버 시작 시 한 번 구성되어 모든 워커가 `Arc`로 공유합니다.
//!
//! ## 초기화 흐름
//!
//! ```text
//! AppConfig::from_env()
//!        │
//!        ▼
//! Database::connect() ──▶ UserRepository
//!                                │
//!                                ▼
//!                  AppState::from_config(&config, store)
//!                                │
//!                                ▼
//!                App::new().app_data(web::Data::new(state))
//! ```
//!
//! 전역 싱글톤 없이 모든 의존성이 생성자 인자로 명시되므로,
//! 테스트에서는 인메모리 저장소를 넣은 상태로 같은 핸들러를 호출할 수 있습니다.

pub mod state;

pub use state::*;

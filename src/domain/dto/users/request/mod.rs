//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 필수 필드 존재 여부를 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`, 실패 시 `MalformedPayload`)
//! 2. **존재 검증**: 필수 필드 누락 여부 (`validator`, 실패 시 `MissingFields`)
//!
//! 검증을 통과한 요청만 `RegisterCredentials` / `LoginCredentials`로 변환되어
//! 서비스 계층으로 전달됩니다.

pub mod auth_request;
pub mod create_user;

pub use auth_request::{LoginCredentials, LoginRequest, LOGIN_FIELDS_REQUIRED};
pub use create_user::{RegisterCredentials, RegisterRequest, REGISTER_FIELDS_REQUIRED};

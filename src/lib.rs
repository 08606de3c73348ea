//! 강의 플랫폼 인증 서비스 백엔드
//!
//! 사용자 회원가입과 이메일/비밀번호 로그인을 제공하는 Rust 기반 인증 서비스입니다.
//! 로그인에 성공하면 사용자 프로필과 수강 중인 강의 ID 목록을 반환합니다.
//!
//! # Features
//!
//! - **회원가입**: 필수 필드 검증, bcrypt 해싱, 이메일 중복 방지
//! - **로그인**: 계정 존재 여부를 드러내지 않는 균일한 인증 실패 응답
//! - **수강 정보**: `enrollments` 테이블에서 강의 ID 조회
//! - **PostgreSQL**: sqlx 연결 풀과 트랜잭션 기반 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   PostgreSQL    │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use course_auth_service::core::AppState;
//! use course_auth_service::repositories::users::UserRepository;
//!
//! let store = Arc::new(UserRepository::new(database));
//! let state = AppState::from_config(&config, store)?;
//!
//! let profile = state.credential_service.login(credentials).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;

#[cfg(test)]
mod test_support;

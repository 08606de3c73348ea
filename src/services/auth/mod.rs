//! 인증 및 보안 서비스 모듈
//!
//! 비밀번호 해싱과 검증을 담당합니다.
//!
//! # Security
//!
//! - bcrypt 적응형 해시 (환경별 cost)
//! - 비밀번호마다 새 솔트 생성
//! - 존재하지 않는 계정도 더미 해시로 검증하여 응답 시간 균일화

pub mod password_service;

pub use password_service::*;

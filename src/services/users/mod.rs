//! 사용자 자격 증명 서비스 모듈
//!
//! 회원가입과 로그인 비즈니스 로직을 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 이메일 중복 방지 (사전 조회 + 유니크 제약)
//! - 계정 존재 여부를 드러내지 않는 균일한 인증 실패
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::CredentialService;
//!
//! let profile = credential_service.register(credentials).await?;
//! assert!(profile.enrolled_courses.is_empty());
//! ```

pub mod credential_service;

pub use credential_service::CredentialService;

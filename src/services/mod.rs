//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인별로 모듈화되어 자격 증명 처리와 비밀번호 해싱을 담당합니다.
//! 서비스 인스턴스는 `main`에서 한 번 생성되어 [`crate::core::AppState`]로 전달됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::PasswordService, users::CredentialService};
//!
//! let passwords = PasswordService::new(config.password.bcrypt_cost)?;
//! let service = CredentialService::new(store, passwords);
//! let profile = service.login(credentials).await?;
//! ```

pub mod users;
pub mod auth;

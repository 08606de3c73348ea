//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`users::CredentialStore`] trait에만 의존하고,
//! 운영 환경에서는 PostgreSQL 구현체인 [`users::UserRepository`]가 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{CredentialStore, UserRepository};
//!
//! let store: Arc<dyn CredentialStore> = Arc::new(UserRepository::new(database));
//! let user = store.find_by_email("user@example.com").await?;
//! ```

pub mod users;

//! # 도메인 엔티티
//!
//! 관계형 저장소의 행(row)을 그대로 표현하는 타입들입니다.
//! `sqlx::FromRow`로 조회 결과에서 직접 생성됩니다.

pub mod users;
pub mod enrollments;

pub use users::*;
pub use enrollments::*;

//! Enrollment Entity
//!
//! `enrollments` 테이블의 행입니다. 수강 등록은 다른 시스템이 관리하며
//! 이 서비스는 로그인 응답을 만들 때 읽기만 합니다.

use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Enrollment {
    pub user_id: i32,
    pub course_id: i32,
}

//! User Entity Implementation
//!
//! `users` 테이블의 행을 표현하는 엔티티입니다.

use sqlx::FromRow;

/// 저장된 사용자
///
/// `password`는 항상 bcrypt 해시이며, 이 타입은 응답으로 직렬화되지 않습니다.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
    /// 저장소 기본값으로 채워지는 역할
    ///
    /// 기존 스키마에 기본값이 없을 수도 있어 nullable로 읽습니다.
    pub role: Option<String>,
}

/// 가입 시 저장할 사용자 정보
///
/// `id`와 `role`은 저장소가 생성합니다.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    /// 레거시 `plain_password` 컬럼에 기록할 원문 비밀번호
    ///
    /// 호환성 옵션이 켜진 경우에만 `Some`입니다.
    pub plain_password: Option<String>,
}

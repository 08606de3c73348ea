use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// 회원가입/로그인 성공 응답 DTO
///
/// 비밀번호 해시를 제외한 사용자 정보와 수강 중인 강의 ID 목록을 담습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: Option<String>,
    pub enrolled_courses: Vec<i32>,
}

impl UserProfileResponse {
    /// 사용자 엔티티와 수강 강의 목록으로 응답을 생성합니다.
    pub fn new(user: User, enrolled_courses: Vec<i32>) -> Self {
        let User {
            id,
            username,
            email,
            role,
            ..
        } = user;

        Self {
            id,
            username,
            email,
            role,
            enrolled_courses,
        }
    }
}

impl From<User> for UserProfileResponse {
    /// 새로 가입한 사용자는 수강 강의가 없습니다.
    fn from(user: User) -> Self {
        Self::new(user, Vec::new())
    }
}

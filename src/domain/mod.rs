//! # Domain Layer
//!
//! 회원가입/로그인에 필요한 도메인 타입을 정의합니다.
//!
//! - [`entities`] - `users`, `enrollments` 테이블에 대응하는 엔티티
//! - [`dto`] - HTTP 요청/응답 데이터 전송 객체
//!
//! 엔티티는 저장소 계층에서만 생성되며, 응답으로 나갈 때는 항상
//! [`dto::UserProfileResponse`]로 변환되어 비밀번호 해시가 외부로 노출되지 않습니다.

pub mod entities;
pub mod dto;

pub use entities::{Enrollment, NewUser, User};
pub use dto::{
    LoginCredentials, LoginRequest, RegisterCredentials, RegisterRequest, UserProfileResponse,
    LOGIN_FIELDS_REQUIRED, REGISTER_FIELDS_REQUIRED,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_types_resolve_from_domain_root() {
        let user = User {
            id: 1,
            username: "kim".to_string(),
            email: "kim@x.com".to_string(),
            password: "hash".to_string(),
            role: None,
        };

        let profile = UserProfileResponse::new(user, vec![3]);
        let enrollment = Enrollment {
            user_id: profile.id,
            course_id: 3,
        };

        assert_eq!(profile.enrolled_courses, vec![enrollment.course_id]);
        assert_eq!(
            LoginRequest::default().into_credentials().unwrap_err().to_string(),
            LOGIN_FIELDS_REQUIRED
        );
    }
}

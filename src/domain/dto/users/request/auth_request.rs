//! 인증 요청관련 DTO
//!
//! 로그인을 요청하는 사용자의 요청 정보를 매핑합니다.
use log::debug;
use serde::Deserialize;
use validator::Validate;

use crate::errors::AppError;

/// 필드 누락 시 응답 메시지
pub const LOGIN_FIELDS_REQUIRED: &str = "Email and password required";

/// 로컬 로그인 요청 구조체
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required(message = "email은 필수입니다"))]
    pub email: Option<String>,

    #[validate(required(message = "password는 필수입니다"))]
    pub password: Option<String>,
}

/// 검증을 통과한 로그인 자격 증명
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// 필수 필드를 검증하고 [`LoginCredentials`]로 변환합니다.
    pub fn into_credentials(self) -> Result<LoginCredentials, AppError> {
        self.validate().map_err(|errors| {
            debug!("로그인 필수 필드 누락: {:?}", errors.field_errors().keys());
            missing_fields()
        })?;

        let (Some(email), Some(password)) = (self.email, self.password) else {
            return Err(missing_fields());
        };

        Ok(LoginCredentials { email, password })
    }
}

fn missing_fields() -> AppError {
    AppError::MissingFields(LOGIN_FIELDS_REQUIRED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_payload_converts() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"email": "a@x.com", "password": "pw"}"#).unwrap();

        let credentials = request.into_credentials().unwrap();

        assert_eq!(credentials.email, "a@x.com");
        assert_eq!(credentials.password, "pw");
    }

    #[test]
    fn test_missing_email_is_rejected() {
        let request: LoginRequest = serde_json::from_str(r#"{"password": "pw"}"#).unwrap();

        match request.into_credentials() {
            Err(AppError::MissingFields(msg)) => assert_eq!(msg, LOGIN_FIELDS_REQUIRED),
            other => panic!("Expected MissingFields, got {:?}", other),
        }
    }
}

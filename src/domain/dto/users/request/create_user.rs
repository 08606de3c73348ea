//! # 회원가입 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//!
//! ## 검증 규칙
//!
//! `username`, `email`, `password` 세 필드가 모두 존재해야 합니다.
//! 키가 없거나 값이 `null`이면 누락으로 취급합니다.
//! 형식 검증(이메일 형식, 비밀번호 강도 등)은 이 서비스의 책임이 아닙니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::dto::users::request::RegisterRequest;
//!
//! #[actix_web::post("/register")]
//! async fn register(payload: web::Json<RegisterRequest>) -> Result<HttpResponse, AppError> {
//!     let credentials = payload.into_inner().into_credentials()?;
//!     // ...
//! }
//! ```

use log::debug;
use serde::Deserialize;
use validator::Validate;

use crate::errors::AppError;

/// 필드 누락 시 응답 메시지
pub const REGISTER_FIELDS_REQUIRED: &str = "Username, email, and password required";

/// 회원가입 요청 본문
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(required(message = "username은 필수입니다"))]
    pub username: Option<String>,

    #[validate(required(message = "email은 필수입니다"))]
    pub email: Option<String>,

    #[validate(required(message = "password는 필수입니다"))]
    pub password: Option<String>,
}

/// 검증을 통과한 회원가입 자격 증명
#[derive(Debug, Clone)]
pub struct RegisterCredentials {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// 필수 필드를 검증하고 타입이 고정된 자격 증명으로 변환합니다.
    ///
    /// # Errors
    ///
    /// 필드가 하나라도 없으면 `AppError::MissingFields`
    pub fn into_credentials(self) -> Result<RegisterCredentials, AppError> {
        self.validate().map_err(|errors| {
            debug!("회원가입 필수 필드 누락: {:?}", errors.field_errors().keys());
            missing_fields()
        })?;

        let (Some(username), Some(email), Some(password)) =
            (self.username, self.email, self.password)
        else {
            return Err(missing_fields());
        };

        Ok(RegisterCredentials {
            username,
            email,
            password,
        })
    }
}

fn missing_fields() -> AppError {
    AppError::MissingFields(REGISTER_FIELDS_REQUIRED.to_string())
}

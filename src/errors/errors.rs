//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 회원가입/로그인 요청 처리 중 발생하는 모든 실패를 하나의 열거형으로 모읍니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 에러가
//! `{"error": "..."}` 형태의 JSON 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `MissingFields` | 400 Bad Request |
//! | `MalformedPayload` | 400 Bad Request |
//! | `DuplicateEmail` | 400 Bad Request |
//! | `InvalidCredentials` | 401 Unauthorized |
//! | `StorageError` | 500 Internal Server Error |
//! | `InternalError` | 500 Internal Server Error |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn login(payload: LoginRequest) -> Result<UserProfileResponse, AppError> {
//!     let credentials = payload.into_credentials()?;
//!     service.login(credentials).await
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 핸들러 경계에서 모든 실패가 이 타입으로 수렴하며,
/// 호출자에게 처리되지 않은 장애가 전파되는 일은 없습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 필드 누락 (400 Bad Request)
    ///
    /// 저장소에 접근하기 전에 반환됩니다.
    #[error("{0}")]
    MissingFields(String),

    /// JSON 본문 파싱 실패 (400 Bad Request)
    #[error("Invalid request body: {0}")]
    MalformedPayload(String),

    /// 이미 가입된 이메일 (400 Bad Request)
    #[error("Email already registered")]
    DuplicateEmail,

    /// 인증 실패 (401 Unauthorized)
    ///
    /// 존재하지 않는 이메일과 틀린 비밀번호 모두 동일한 메시지를 사용합니다.
    /// 응답만으로 계정 존재 여부를 알 수 없어야 합니다.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// 저장소 에러 (500 Internal Server Error)
    #[error("{0}")]
    StorageError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::MissingFields(_)
            | AppError::MalformedPayload(_)
            | AppError::DuplicateEmail => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::StorageError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 `{"error": "Human readable error message"}` 형식을 따릅니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_missing_fields_response() {
        let error = AppError::MissingFields("Email and password required".to_string());

        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "Email and password required");
    }

    #[test]
    fn test_duplicate_email_is_bad_request() {
        let error = AppError::DuplicateEmail;

        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "Email already registered");
    }

    #[test]
    fn test_invalid_credentials_response() {
        let error = AppError::InvalidCredentials;

        assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_storage_error_keeps_message() {
        let error = AppError::StorageError("connection refused".to_string());

        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "connection refused");
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());

        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

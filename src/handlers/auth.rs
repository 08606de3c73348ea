//! Authentication HTTP Handlers
//!
//! 회원가입과 이메일/비밀번호 로그인 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! # Endpoints
//!
//! - **회원가입**: `POST /api/register` → `201 Created`
//! - **로그인**: `POST /api/login` → `200 OK`
//!
//! 두 엔드포인트 모두 성공 시 [`UserProfileResponse`](crate::domain::UserProfileResponse)를,
//! 실패 시 `{"error": "..."}` 본문을 반환합니다.
use actix_web::{post, web, HttpResponse};

use crate::core::AppState;
use crate::domain::{LoginRequest, RegisterRequest};
use crate::errors::AppError;

/// 회원가입 핸들러
///
/// 필수 필드 검증은 저장소 접근 전에 수행됩니다.
///
/// # Endpoint
/// `POST /api/register`
///
/// # Responses
/// - `201` - `{id, username, email, role, enrolledCourses: []}`
/// - `400` - 필드 누락 또는 중복 이메일
/// - `500` - 저장소 실패
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let credentials = payload.into_inner().into_credentials()?;

    let profile = state.credential_service.register(credentials).await?;

    Ok(HttpResponse::Created().json(profile))
}

/// 로컬 로그인 핸들러
///
/// # Endpoint
/// `POST /api/login`
///
/// # Responses
/// - `200` - `{id, username, email, role, enrolledCourses: [...]}`
/// - `400` - 필드 누락
/// - `401` - `{"error": "Invalid credentials"}` (없는 이메일, 틀린 비밀번호 공통)
/// - `500` - 저장소 실패
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let credentials = payload.into_inner().into_credentials()?;

    let profile = state.credential_service.login(credentials).await?;

    Ok(HttpResponse::Ok().json(profile))
}

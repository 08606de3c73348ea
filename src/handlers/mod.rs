//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 요청 본문 추출과 응답 변환만 담당하고, 비즈니스 로직은 서비스 계층에 위임합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Frontend Dev Server)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   CredentialService - 비즈니스 로직             ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   CredentialStore - 데이터 접근                 ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 요청 처리 순서
//!
//! 1. `web::Json<T>` 추출 (파싱 실패 시 `AppError::MalformedPayload`)
//! 2. `into_credentials()`로 필수 필드 검증 (`AppError::MissingFields`)
//! 3. `web::Data<AppState>`의 서비스 호출
//! 4. 성공 시 JSON 응답, 실패 시 `AppError`가 `{"error": ...}`로 변환
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 회원가입 (`POST /api/register`), 로그인 (`POST /api/login`)

pub mod auth;

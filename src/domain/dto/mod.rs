//! # Data Transfer Objects
//!
//! HTTP 경계에서 사용하는 요청/응답 구조체입니다.
//! 요청 DTO는 모든 필드를 `Option`으로 받아 누락을 직접 감지하고,
//! 검증을 통과하면 타입이 고정된 자격 증명 구조체로 변환됩니다.

pub mod users;

pub use users::*;

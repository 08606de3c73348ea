//! # 비밀번호 해싱 서비스
//!
//! bcrypt 해싱/검증을 actix 블로킹 스레드 풀에서 실행합니다.
//! bcrypt는 의도적으로 느린 CPU 작업이므로 비동기 워커를 점유하지 않도록
//! 항상 `web::block`을 거칩니다.

use std::time::Instant;

use actix_web::web;
use log::{debug, error};

use crate::errors::{AppError, AppResult};

/// 존재하지 않는 계정 검증에 쓰이는 더미 해시의 원문
const DUMMY_PASSWORD: &str = "course-auth-timing-equalizer";

/// bcrypt 기반 비밀번호 해싱 서비스
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let passwords = PasswordService::new(12)?;
///
/// let hash = passwords.hash("secret".to_string()).await?;
/// assert!(passwords.verify("secret".to_string(), Some(hash)).await?);
/// ```
#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
    /// 사용자가 없을 때 대신 검증할 해시 (같은 cost로 생성)
    dummy_hash: String,
}

impl PasswordService {
    /// 주어진 bcrypt cost로 서비스를 생성합니다.
    ///
    /// 생성 시 더미 해시를 한 번 계산합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - cost가 bcrypt 허용 범위를 벗어난 경우
    pub fn new(cost: u32) -> AppResult<Self> {
        let dummy_hash = bcrypt::hash(DUMMY_PASSWORD, cost)
            .map_err(|e| AppError::InternalError(format!("더미 해시 생성 실패: {}", e)))?;

        Ok(Self { cost, dummy_hash })
    }

    /// 새 솔트로 비밀번호를 해싱합니다.
    pub async fn hash(&self, password: String) -> AppResult<String> {
        let cost = self.cost;
        let hash_start = Instant::now();

        let password_hash = web::block(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("해싱 작업 실행 실패: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        debug!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(password_hash)
    }

    /// 비밀번호를 저장된 해시와 비교합니다.
    ///
    /// `stored_hash`가 `None`(계정 없음)이면 더미 해시로 같은 비용의 검증을 수행한 뒤
    /// `false`를 반환합니다. 저장된 해시를 bcrypt가 해석하지 못하는 경우도
    /// 에러 로그를 남기고 `false`로 처리합니다.
    pub async fn verify(&self, password: String, stored_hash: Option<String>) -> AppResult<bool> {
        let account_exists = stored_hash.is_some();
        let hash = stored_hash.unwrap_or_else(|| self.dummy_hash.clone());
        let verify_start = Instant::now();

        let outcome = web::block(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AppError::InternalError(format!("검증 작업 실행 실패: {}", e)))?;

        debug!("Password verification took: {:?}", verify_start.elapsed());

        match outcome {
            Ok(matches) => Ok(account_exists && matches),
            Err(e) => {
                error!("저장된 비밀번호 해시를 검증할 수 없습니다: {}", e);
                Ok(false)
            }
        }
    }
}

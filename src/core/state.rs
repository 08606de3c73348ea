//! 핸들러가 공유하는 애플리케이션 상태

use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::repositories::users::CredentialStore;
use crate::services::users::CredentialService;

/// 모든 요청 핸들러가 공유하는 상태
///
/// ```rust,ignore
/// let state = AppState::from_config(&config, Arc::new(UserRepository::new(database)))?;
///
/// HttpServer::new(move || {
///     App::new()
///         .app_data(web::Data::new(state.clone()))
///         .configure(configure_all_routes)
/// })
/// ```
#[derive(Clone)]
pub struct AppState {
    pub credential_service: Arc<CredentialService>,
}

impl AppState {
    pub fn new(credential_service: CredentialService) -> Self {
        Self {
            credential_service: Arc::new(credential_service),
        }
    }

    /// 설정과 저장소로 서비스 그래프를 구성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 비밀번호 서비스 초기화 실패
    pub fn from_config(config: &AppConfig, store: Arc<dyn CredentialStore>) -> AppResult<Self> {
        let credential_service = CredentialService::from_config(store, config)?;
        Ok(Self::new(credential_service))
    }
}

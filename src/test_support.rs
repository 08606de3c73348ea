//! 테스트 전용 인메모리 저장소와 헬퍼

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::users::{NewUser, User};
use crate::repositories::users::{CredentialStore, StoreError};
use crate::services::auth::PasswordService;
use crate::services::users::CredentialService;

/// 테스트에서 쓰는 최소 bcrypt cost
pub const TEST_BCRYPT_COST: u32 = 4;

#[derive(Default)]
struct StoreState {
    users: Vec<User>,
    plain_passwords: HashMap<String, String>,
    enrollments: Vec<(i32, i32)>,
    failure: Option<String>,
    next_id: i32,
}

/// `CredentialStore`의 인메모리 구현
///
/// 호출 횟수를 기록하고, `fail_with`로 저장소 실패를 주입할 수 있습니다.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    state: Mutex<StoreState>,
    calls: AtomicUsize,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enroll(&self, user_id: i32, course_id: i32) {
        self.lock().enrollments.push((user_id, course_id));
    }

    /// 이후 모든 호출이 주어진 메시지의 `StoreError::Database`로 실패합니다.
    pub fn fail_with(&self, message: &str) {
        self.lock().failure = Some(message.to_string());
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn user_count(&self) -> usize {
        self.lock().users.len()
    }

    pub fn stored_user(&self, email: &str) -> Option<User> {
        self.lock().users.iter().find(|u| u.email == email).cloned()
    }

    pub fn plain_password_of(&self, email: &str) -> Option<String> {
        self.lock().plain_passwords.get(email).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreState> {
        self.state.lock().unwrap()
    }

    fn begin_call(&self) -> Result<std::sync::MutexGuard<'_, StoreState>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let state = self.lock();
        match &state.failure {
            Some(message) => Err(StoreError::Database(message.clone())),
            None => Ok(state),
        }
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn insert_unique(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut state = self.begin_call()?;

        if state.users.iter().any(|u| u.email == new_user.email) {
            return Err(StoreError::DuplicateEmail);
        }

        state.next_id += 1;
        let user = User {
            id: state.next_id,
            username: new_user.username,
            email: new_user.email,
            password: new_user.password_hash,
            role: Some("student".to_string()),
        };

        if let Some(plain_password) = new_user.plain_password {
            state
                .plain_passwords
                .insert(user.email.clone(), plain_password);
        }
        state.users.push(user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let state = self.begin_call()?;
        Ok(state.users.iter().find(|u| u.email == email).cloned())
    }

    async fn enrolled_course_ids(&self, user_id: i32) -> Result<Vec<i32>, StoreError> {
        let state = self.begin_call()?;

        let mut courses: Vec<i32> = state
            .enrollments
            .iter()
            .filter(|(owner, _)| *owner == user_id)
            .map(|(_, course_id)| *course_id)
            .collect();
        courses.sort_unstable();

        Ok(courses)
    }
}

/// 인메모리 저장소 위에 최소 cost로 서비스를 구성합니다.
pub fn credential_service(store: Arc<InMemoryCredentialStore>) -> CredentialService {
    let passwords = PasswordService::new(TEST_BCRYPT_COST).unwrap();
    CredentialService::new(store, passwords)
}

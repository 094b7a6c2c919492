use std::sync::Mutex;

use axum::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::accounts::repo::{AccountStore, User};
use crate::error::AuthError;
use crate::signins::repo::{SigninEvent, SigninLog};

/// In-memory AccountStore for tests. The mutex makes the duplicate check and
/// the insert one atomic step, mirroring the database unique index.
#[derive(Default)]
pub struct MemoryAccounts {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl AccountStore for MemoryAccounts {
    async fn create(
        &self,
        fullname: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AuthError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == email) {
            return Err(AuthError::DuplicateAccount);
        }
        let user = User {
            id: Uuid::new_v4(),
            fullname: fullname.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<User>, AuthError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().rev().take(limit as usize).cloned().collect())
    }
}

/// In-memory SigninLog for tests.
#[derive(Default)]
pub struct MemorySignins {
    events: Mutex<Vec<SigninEvent>>,
}

#[async_trait]
impl SigninLog for MemorySignins {
    async fn record(&self, user_id: Uuid, email: &str) -> Result<SigninEvent, AuthError> {
        let event = SigninEvent {
            id: Uuid::new_v4(),
            user_id,
            email: email.to_string(),
            ts: OffsetDateTime::now_utc(),
        };
        self.events.lock().unwrap().push(event.clone());
        Ok(event)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<SigninEvent>, AuthError> {
        let events = self.events.lock().unwrap();
        let mut out: Vec<SigninEvent> = events.clone();
        out.sort_by(|a, b| b.ts.cmp(&a.ts));
        out.truncate(limit as usize);
        Ok(out)
    }
}

use axum::async_trait;
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::AuthError;

/// One successful authentication. Appended at signin time, never updated.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SigninEvent {
    pub id: Uuid,
    pub user_id: Uuid,
    pub email: String, // normalized email captured at signin time
    #[serde(with = "time::serde::rfc3339")]
    pub ts: OffsetDateTime,
}

#[async_trait]
pub trait SigninLog: Send + Sync {
    /// Append an event with a store-side timestamp.
    async fn record(&self, user_id: Uuid, email: &str) -> Result<SigninEvent, AuthError>;

    /// Up to `limit` events, newest first.
    async fn list_recent(&self, limit: i64) -> Result<Vec<SigninEvent>, AuthError>;
}

#[derive(Clone)]
pub struct PgSigninLog {
    db: PgPool,
}

impl PgSigninLog {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SigninLog for PgSigninLog {
    async fn record(&self, user_id: Uuid, email: &str) -> Result<SigninEvent, AuthError> {
        let event = sqlx::query_as::<_, SigninEvent>(
            r#"
            INSERT INTO signins (user_id, email)
            VALUES ($1, $2)
            RETURNING id, user_id, email, ts
            "#,
        )
        .bind(user_id)
        .bind(email)
        .fetch_one(&self.db)
        .await?;
        Ok(event)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<SigninEvent>, AuthError> {
        let rows = sqlx::query_as::<_, SigninEvent>(
            r#"
            SELECT id, user_id, email, ts
            FROM signins
            ORDER BY ts DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn ts_serializes_as_rfc3339() {
        let event = SigninEvent {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            email: "jane@example.com".into(),
            ts: datetime!(2026-01-02 03:04:05 UTC),
        };
        let json = serde_json::to_string(&event).expect("serialize event");
        assert!(json.contains(r#""ts":"2026-01-02T03:04:05"#));
    }
}

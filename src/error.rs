use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Everything a request can fail with. Each variant maps to one HTTP status
/// and a fixed user-safe message; internal detail is logged, never returned.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("User already exists.")]
    DuplicateAccount,
    #[error("Invalid credentials!")]
    InvalidCredentials,
    #[error("Invalid user ID.")]
    InvalidIdentifier,
    #[error("User not found.")]
    NotFound,
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::MissingFields | AuthError::InvalidIdentifier => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::NotFound => StatusCode::NOT_FOUND,
            AuthError::DuplicateAccount => StatusCode::CONFLICT,
            AuthError::Storage(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AuthError::Storage(e) => {
                error!(error = %e, "storage error");
                "Server error.".to_string()
            }
            AuthError::Internal(e) => {
                error!(error = %e, "internal error");
                "Server error.".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(AuthError::MissingFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::InvalidIdentifier.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AuthError::DuplicateAccount.status(), StatusCode::CONFLICT);
        assert_eq!(
            AuthError::Storage(sqlx::Error::PoolTimedOut).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn invalid_credentials_body_is_fixed() {
        let res = AuthError::InvalidCredentials.into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body = axum::body::to_bytes(res.into_body(), 1024)
            .await
            .expect("read body");
        assert_eq!(body.as_ref(), br#"{"message":"Invalid credentials!"}"#);
    }

    #[tokio::test]
    async fn storage_errors_do_not_leak_detail() {
        let res = AuthError::Storage(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(res.into_body(), 1024)
            .await
            .expect("read body");
        assert_eq!(body.as_ref(), br#"{"message":"Server error."}"#);
    }
}

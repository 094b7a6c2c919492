use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Request body for signup. Absent fields deserialize to empty strings so
/// they hit the same missing-field rejection as explicit empties.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for signin.
#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Response returned after a successful signup.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub fullname: String,
}

/// Response returned after a successful signin.
#[derive(Debug, Serialize)]
pub struct SigninResponse {
    pub message: String,
    pub id: Uuid,
    pub fullname: String,
}

/// Profile returned by GET /user/:id. Never carries the password field.
#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub fullname: String,
    pub email: String,
}

/// Public part of a user returned by the debug listing.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub fullname: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_request_fields_deserialize_to_empty() {
        let req: SignupRequest =
            serde_json::from_str(r#"{"email":"jane@example.com"}"#).expect("deserialize");
        assert_eq!(req.fullname, "");
        assert_eq!(req.email, "jane@example.com");
        assert_eq!(req.password, "");
    }
}

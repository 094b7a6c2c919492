use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    accounts::{
        dto::{
            PublicUser, SigninRequest, SigninResponse, SignupRequest, SignupResponse, UserProfile,
        },
        password::{hash_password, verify_password},
        services::normalize_email,
    },
    error::AuthError,
    state::AppState,
};

const DEBUG_LIST_LIMIT: i64 = 50;

pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
        .route("/user/:id", get(get_user))
        .route("/debug/users", get(debug_users))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, AuthError> {
    if payload.fullname.trim().is_empty()
        || payload.email.trim().is_empty()
        || payload.password.is_empty()
    {
        warn!("signup with missing fields");
        return Err(AuthError::MissingFields);
    }

    let email = normalize_email(&payload.email);
    let hash = hash_password(&payload.password)?;

    // No pre-check query: the unique index decides, so two concurrent
    // signups with the same email cannot both succeed.
    let user = state
        .accounts
        .create(&payload.fullname, &email, &hash)
        .await?;

    info!(user_id = %user.id, email = %user.email, "user created");
    Ok(Json(SignupResponse {
        message: "Account created successfully!".into(),
        fullname: user.fullname,
    }))
}

#[instrument(skip(state, payload))]
pub async fn signin(
    State(state): State<AppState>,
    Json(payload): Json<SigninRequest>,
) -> Result<Json<SigninResponse>, AuthError> {
    if payload.email.trim().is_empty() || payload.password.is_empty() {
        warn!("signin with missing fields");
        return Err(AuthError::MissingFields);
    }

    let email = normalize_email(&payload.email);

    // Unknown email and wrong password answer identically.
    let user = match state.accounts.find_by_email(&email).await? {
        Some(u) => u,
        None => {
            warn!(email = %email, "signin unknown email");
            return Err(AuthError::InvalidCredentials);
        }
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(email = %email, user_id = %user.id, "signin invalid password");
        return Err(AuthError::InvalidCredentials);
    }

    // Best-effort append: a failed log write must not fail the signin.
    if let Err(e) = state.signins.record(user.id, &email).await {
        warn!(error = %e, user_id = %user.id, "failed to record signin");
    }

    info!(user_id = %user.id, email = %email, "user signed in");
    Ok(Json(SigninResponse {
        message: "Signed in successfully!".into(),
        id: user.id,
        fullname: user.fullname,
    }))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserProfile>, AuthError> {
    let id = Uuid::parse_str(&id).map_err(|_| AuthError::InvalidIdentifier)?;
    let user = state
        .accounts
        .find_by_id(id)
        .await?
        .ok_or(AuthError::NotFound)?;
    Ok(Json(UserProfile {
        fullname: user.fullname,
        email: user.email,
    }))
}

#[instrument(skip(state))]
pub async fn debug_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicUser>>, AuthError> {
    let users = state.accounts.list_recent(DEBUG_LIST_LIMIT).await?;
    let items = users
        .into_iter()
        .map(|u| PublicUser {
            id: u.id,
            fullname: u.fullname,
            email: u.email,
            created_at: u.created_at,
        })
        .collect();
    Ok(Json(items))
}

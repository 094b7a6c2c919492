use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::{error::AuthError, signins::repo::SigninEvent, state::AppState};

const DEBUG_LIST_LIMIT: i64 = 50;

pub fn signin_log_routes() -> Router<AppState> {
    Router::new().route("/debug/signins", get(debug_signins))
}

#[instrument(skip(state))]
pub async fn debug_signins(
    State(state): State<AppState>,
) -> Result<Json<Vec<SigninEvent>>, AuthError> {
    let events = state.signins.list_recent(DEBUG_LIST_LIMIT).await?;
    Ok(Json(events))
}

use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod handlers;
pub mod password;
pub mod repo;
pub(crate) mod services;

pub fn router() -> Router<AppState> {
    handlers::account_routes()
}

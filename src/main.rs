use anyhow::Context;

mod accounts;
mod app;
mod config;
mod error;
mod signins;
mod state;
#[cfg(test)]
mod testutil;

use crate::app::{build_app, serve};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "authgate=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    // A missing database at startup is fatal; never serve without it.
    let app_state = AppState::init().await?;

    // The unique index on users.email is load-bearing for signup, so a
    // migration failure is fatal too.
    sqlx::migrate!("./migrations")
        .run(&app_state.db)
        .await
        .context("run migrations")?;

    let app = build_app(app_state);
    serve(app).await
}

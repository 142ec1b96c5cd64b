mod app;
mod config;
mod dialogue;
mod error;
mod extract;
mod progress;
mod state;
mod words;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "freelingo=debug,axum=info,tower_http=info".to_string());
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

    let app_state = AppState::init()?;
    let addr = app_state.config.bind_addr();
    tracing::info!(
        origins = ?app_state.config.cors_origins,
        "vocabulary store ready (in-memory)"
    );

    let app = app::build_app(app_state);
    app::serve(app, &addr).await
}

mod advs;
mod app;
mod config;
mod dto;
mod error;
mod extract;
mod password;
mod state;
mod store;
#[cfg(test)]
mod test_support;
mod users;

use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "advboard=debug,axum=info,tower_http=info".to_string());
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

    tracing::info!("starting");
    let config = AppConfig::from_env()?;
    let app_state = AppState::init(config).await?;
    let app = app::build_app(app_state.clone());

    app::serve(app, app_state).await
}

use anyhow::Result;
use ask_api::{build_app, AppState};
use assistant_core::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    let config = AppConfig::from_env();

    let default_level = if config.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    log::info!(
        "Starting {} (primary model: {}, fallback model: {})",
        config.app_name,
        config.primary_model,
        config.fallback_model
    );

    let address = config.bind_address();
    let app = build_app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&address).await?;
    log::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

mod state;
mod websocket;
mod routes;
mod engine_service;
mod handlers;
mod messages;
mod session;
mod controller;
mod language;
mod error;
mod config_manager;
mod asr;
mod translate;

use anyhow::Result;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config_manager::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lingo_bridge=debug,tower_http=debug")),
        )
        .init();

    // Get the executable directory to resolve relative paths correctly
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.json".to_string()),
        exe_dir.join("conf.yaml").to_str().map(|s| s.to_string()),
        exe_dir.join("conf.json").to_str().map(|s| s.to_string()),
    ].into_iter().flatten().collect();

    let (config, loaded_path) = Config::load_first(&config_paths);
    match loaded_path {
        Some(path) => info!(
            "Loaded configuration {} from: {}",
            config.system_config.conf_version, path
        ),
        None => info!("No configuration file found, using defaults. Tried: {:?}", config_paths),
    }

    let app_state = AppState::new(config.clone())?;
    info!("Engine service at {}", app_state.engine_service.base_url());

    let app = Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr = config.system_config.bind_addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

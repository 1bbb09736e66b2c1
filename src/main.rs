use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use rehab_booking::config::AppConfig;
use rehab_booking::handlers;
use rehab_booking::services::catalog::Catalog;
use rehab_booking::services::sessions::SessionStore;
use rehab_booking::services::submission;
use rehab_booking::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let catalog = Catalog::load()?;

    let sink = submission::from_config(&config)?;

    let state = Arc::new(AppState {
        sessions: SessionStore::new(config.session_ttl_minutes, config.submission_timeout()),
        config: config.clone(),
        catalog,
        sink,
    });

    let app = handlers::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

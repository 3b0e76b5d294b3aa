//! Eventboard API server entry point.

use std::sync::Arc;

use eventboard_api::config::Config;
use eventboard_api::error::AppError;
use eventboard_api::{routes, state, telemetry};
use eventboard_core::clock::SystemClock;
use eventboard_store::{Database, SqliteRepository};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    telemetry::init();

    tracing::info!("Starting Eventboard API server");

    let config = Config::from_env()?;

    // Open the database, applying the schema on first run.
    let database = Database::open(&config.database_path, config.max_connections).await?;
    let repository = Arc::new(SqliteRepository::new(database.store()));
    let app_state = state::AppState::with_repository(Arc::new(SystemClock), repository);

    // TODO: Replace CorsLayer::permissive() with the UI origin once it is deployed separately.
    let app = routes::app(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

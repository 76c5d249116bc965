//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, schema setup and the Axum server lifecycle.

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::domain::repositories::PairRepository;
use crate::infrastructure::persistence::{SqlitePairRepository, connect_pool};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - `url_pairs` schema
/// - Axum HTTP server, stopped gracefully on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or schema setup fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(
        &config.database_url,
        config.db_max_connections,
        config.db_acquire_timeout(),
    )
    .await
    .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    let pair_repository = Arc::new(SqlitePairRepository::new(Arc::new(pool)));
    pair_repository
        .initialize()
        .await
        .context("Failed to initialize schema")?;

    let shortener_service = Arc::new(ShortenerService::new(pair_repository));
    let state = AppState::new(shortener_service);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}

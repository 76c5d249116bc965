//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /shorten`            - Create a pair
//! - `GET    /all`                - List pairs
//! - `DELETE /delete-pair/{code}` - Delete a pair
//! - `GET    /{code}`             - Short link redirect
//! - `GET    /health`             - Storage health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes, state and tracing applied.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::service_routes())
        .merge(api::routes::pair_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`build_router`] wrapped so that
/// `/all/` and `/all` reach the same handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}

//! API route configuration.

use crate::api::handlers::{
    delete_pair_handler, health_handler, list_pairs_handler, redirect_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Pair management and redirect routes.
///
/// # Endpoints
///
/// - `POST   /shorten`            - Create a pair for a URL
/// - `GET    /all`                - List every pair
/// - `DELETE /delete-pair/{code}` - Delete a pair
/// - `GET    /{code}`             - Redirect to the original URL
pub fn pair_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/all", get(list_pairs_handler))
        .route("/delete-pair/{code}", delete(delete_pair_handler))
        .route("/{code}", get(redirect_handler))
}

/// Service routes that are not part of the pair API.
///
/// - `GET /health` - Storage health check
pub fn service_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}

//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::api::handlers::pairs::list_pairs_handler;
use crate::error::AppError;
use crate::state::AppState;

/// Path segment that lists pairs instead of being resolved as a code.
pub const ALL_PAIRS_SEGMENT: &str = "all";

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Returns `303 See Other` with the original URL in `Location`. The code
/// `all` is never resolved; it answers with the pair listing instead, the
/// same as `GET /all`.
///
/// Under [`crate::api::routes::pair_routes`] the static `/all` route wins, so
/// this branch only serves routers that mount `/{code}` without `/all`.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if code == ALL_PAIRS_SEGMENT {
        return list_pairs_handler(State(state))
            .await
            .map(IntoResponse::into_response);
    }

    let original_url = state.shortener_service.resolve_short_code(&code).await?;
    debug!("Redirecting {} -> {}", code, original_url);

    Ok(Redirect::to(&original_url).into_response())
}

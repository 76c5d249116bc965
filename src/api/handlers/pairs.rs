//! Handlers for listing and deleting URL pairs.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::pair::PairResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored pair.
///
/// # Endpoint
///
/// `GET /all`
///
/// # Response
///
/// ```json
/// [
///   { "original_url": "https://google.com/", "short_code": "46plOCsbuD" }
/// ]
/// ```
pub async fn list_pairs_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PairResponse>>, AppError> {
    let pairs = state.shortener_service.list_pairs().await?;

    Ok(Json(pairs.into_iter().map(PairResponse::from).collect()))
}

/// Deletes a pair by short code.
///
/// # Endpoint
///
/// `DELETE /delete-pair/{code}`
///
/// A percent-encoded absolute URL is also accepted in place of the code and
/// deletes the pair for that original URL.
///
/// # Response Codes
///
/// - **204 No Content**: pair deleted
/// - **404 Not Found**: no pair matches
/// - **422 Unprocessable Entity**: URL identifier is malformed
pub async fn delete_pair_handler(
    Path(identifier): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.shortener_service.delete_pair(&identifier).await?;

    Ok(StatusCode::NO_CONTENT)
}

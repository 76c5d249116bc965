//! Handler for URL shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a URL pair and returns its short code.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://google.com" }
/// ```
///
/// # Response
///
/// **201 Created**
///
/// ```json
/// { "short_code": "46plOCsbuD" }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: the URL has already been shortened
/// - **422 Unprocessable Entity**: the URL is not an absolute http(s) URL
/// - **503 Service Unavailable**: the pair store cannot be reached
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let short_code = state.shortener_service.create_url_pair(&payload.url).await?;

    Ok((StatusCode::CREATED, Json(ShortenResponse { short_code })))
}

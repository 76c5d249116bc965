//! Crate-wide error type and its HTTP representation.
//!
//! Every layer reports failures through [`AppError`]. Storage-engine errors are
//! converted at the repository boundary (see [`map_sqlx_error`]) so that no
//! `sqlx` type ever reaches the service or the transports.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::utils::url_normalizer::UrlNormalizationError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned in JSON error responses.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Domain error kinds shared by the store, the service and every transport.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A write would violate the uniqueness of `original_url` or `short_code`.
    #[error("{message}")]
    AlreadyExists { message: String, details: Value },

    /// The lookup or delete target does not exist.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The supplied string failed syntactic validation before reaching storage.
    #[error("{message}")]
    InvalidInput { message: String, details: Value },

    /// The backing store could not be reached or initialized.
    #[error("{message}")]
    StorageUnavailable { message: String, details: Value },
}

impl AppError {
    pub fn already_exists(message: impl Into<String>, details: Value) -> Self {
        Self::AlreadyExists {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_input(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidInput {
            message: message.into(),
            details,
        }
    }
    pub fn storage_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::StorageUnavailable {
            message: message.into(),
            details,
        }
    }

    /// HTTP status and stable error code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::AlreadyExists { .. } => (StatusCode::BAD_REQUEST, "already_exists"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            AppError::InvalidInput { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_input"),
            AppError::StorageUnavailable { .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, "storage_unavailable")
            }
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code) = self.status_and_code();
        let (message, details) = match self {
            AppError::AlreadyExists { message, details }
            | AppError::NotFound { message, details }
            | AppError::InvalidInput { message, details }
            | AppError::StorageUnavailable { message, details } => (message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
        AppError::invalid_input("Request validation failed", json!({ "fields": fields }))
    }
}

impl From<UrlNormalizationError> for AppError {
    fn from(e: UrlNormalizationError) -> Self {
        AppError::invalid_input("Invalid URL", json!({ "reason": e.to_string() }))
    }
}

/// Converts a storage-engine error into a domain error.
///
/// Unique constraint violations become [`AppError::AlreadyExists`], missing rows
/// become [`AppError::NotFound`], anything else is logged and reported as
/// [`AppError::StorageUnavailable`].
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::already_exists(
                "URL pair already exists",
                json!({ "constraint": db.constraint() }),
            );
        }
    }

    if matches!(e, sqlx::Error::RowNotFound) {
        return AppError::not_found("URL pair not found", json!({}));
    }

    tracing::error!(error = %e, "storage operation failed");
    AppError::storage_unavailable("Storage is unavailable", json!({}))
}

//! Repository trait for URL pair storage.

use crate::domain::entities::{NewUrlPair, UrlPair};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the pair table.
///
/// Both `original_url` and `short_code` are independently unique. Implementations
/// must enforce this with the storage engine's own constraints, never with an
/// application-level read before write.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqlitePairRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_pair.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PairRepository: Send + Sync {
    /// Ensures the backing table exists. Safe to call any number of times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] if the schema cannot be created.
    async fn initialize(&self) -> Result<(), AppError>;

    /// Inserts a new pair and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AlreadyExists`] if the original URL or the short code
    /// is already present. Prior state is left untouched.
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn insert(&self, new_pair: NewUrlPair) -> Result<UrlPair, AppError>;

    /// Returns the original URL stored under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no pair has that code.
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn find_original_by_code(&self, code: &str) -> Result<String, AppError>;

    /// Deletes the pair with the given short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no pair has that code.
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn delete_by_code(&self, code: &str) -> Result<(), AppError>;

    /// Deletes the pair with the given (normalized) original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no pair has that URL.
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn delete_by_original_url(&self, original_url: &str) -> Result<(), AppError>;

    /// Lists every stored pair in store-defined order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn list_all(&self) -> Result<Vec<UrlPair>, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] if it is not.
    async fn ping(&self) -> Result<(), AppError>;
}

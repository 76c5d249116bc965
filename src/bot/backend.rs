//! Core operations exposed to the bot.

use async_trait::async_trait;

use crate::application::services::ShortenerService;
use crate::domain::entities::UrlPair;
use crate::domain::repositories::PairRepository;
use crate::error::AppError;

/// The subset of the shortener the bot talks to.
#[async_trait]
pub trait ShortenerBackend: Send + Sync {
    /// Creates a pair and returns its short code.
    async fn shorten(&self, original_url: &str) -> Result<String, AppError>;

    /// Returns every stored pair.
    async fn list_pairs(&self) -> Result<Vec<UrlPair>, AppError>;
}

#[async_trait]
impl<R: PairRepository> ShortenerBackend for ShortenerService<R> {
    async fn shorten(&self, original_url: &str) -> Result<String, AppError> {
        self.create_url_pair(original_url).await
    }

    async fn list_pairs(&self) -> Result<Vec<UrlPair>, AppError> {
        ShortenerService::list_pairs(self).await
    }
}

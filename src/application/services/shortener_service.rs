//! URL pair creation, resolution and deletion service.

use std::sync::Arc;

use crate::domain::entities::{NewUrlPair, UrlPair};
use crate::domain::repositories::PairRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_normalizer::{looks_like_url, normalize_url};

/// Service for creating, resolving and deleting URL pairs.
///
/// Holds no state of its own between calls; everything persistent lives behind
/// the repository.
pub struct ShortenerService<R: PairRepository> {
    pair_repository: Arc<R>,
}

impl<R: PairRepository> ShortenerService<R> {
    /// Creates a new shortener service.
    pub fn new(pair_repository: Arc<R>) -> Self {
        Self { pair_repository }
    }

    /// Creates a pair for `original_url` and returns its short code.
    ///
    /// The URL is normalized first and the code derived from the normalized
    /// form, so the result is always the same for the same URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if the URL is not an absolute http(s)
    /// URL. Nothing reaches storage in that case.
    ///
    /// Returns [`AppError::AlreadyExists`] if the URL has already been shortened.
    pub async fn create_url_pair(&self, original_url: &str) -> Result<String, AppError> {
        let normalized_url = normalize_url(original_url)?;
        let short_code = generate_code(&normalized_url);

        let new_pair = NewUrlPair::new(&normalized_url, short_code)?;
        let pair = self.pair_repository.insert(new_pair).await?;

        tracing::info!(short_code = %pair.short_code, original_url = %pair.original_url, "url pair created");
        Ok(pair.short_code)
    }

    /// Returns the original URL behind a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn resolve_short_code(&self, code: &str) -> Result<String, AppError> {
        self.pair_repository.find_original_by_code(code).await
    }

    /// Deletes a pair by short code, or by original URL when the identifier
    /// contains `://`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if a URL identifier is malformed.
    /// Returns [`AppError::NotFound`] if no pair matches.
    pub async fn delete_pair(&self, identifier: &str) -> Result<(), AppError> {
        if looks_like_url(identifier) {
            let normalized_url = normalize_url(identifier)?;
            self.pair_repository
                .delete_by_original_url(&normalized_url)
                .await?;
        } else {
            self.pair_repository.delete_by_code(identifier).await?;
        }

        tracing::info!(identifier = %identifier, "url pair deleted");
        Ok(())
    }

    /// Lists every stored pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    pub async fn list_pairs(&self) -> Result<Vec<UrlPair>, AppError> {
        self.pair_repository.list_all().await
    }

    /// Verifies that the pair store is reachable.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.pair_repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockPairRepository;
    use chrono::Utc;
    use serde_json::json;

    fn create_test_pair(id: i64, url: &str, code: &str) -> UrlPair {
        UrlPair::new(id, url.to_string(), code.to_string(), Utc::now())
    }

    #[tokio::test]
    async fn test_create_url_pair_success() {
        let mut mock_repo = MockPairRepository::new();

        mock_repo
            .expect_insert()
            .withf(|new_pair| {
                new_pair.original_url() == "https://google.com/"
                    && new_pair.short_code() == "46plOCsbuD"
            })
            .times(1)
            .returning(|new_pair| {
                Ok(create_test_pair(
                    1,
                    new_pair.original_url(),
                    new_pair.short_code(),
                ))
            });

        let service = ShortenerService::new(Arc::new(mock_repo));

        let code = service.create_url_pair("https://google.com").await.unwrap();
        assert_eq!(code, "46plOCsbuD");
        assert_eq!(code, generate_code("https://google.com/"));
    }

    #[tokio::test]
    async fn test_create_url_pair_normalizes_before_hashing() {
        let mut mock_repo = MockPairRepository::new();

        mock_repo
            .expect_insert()
            .times(2)
            .returning(|new_pair| {
                Ok(create_test_pair(
                    1,
                    new_pair.original_url(),
                    new_pair.short_code(),
                ))
            });

        let service = ShortenerService::new(Arc::new(mock_repo));

        let first = service.create_url_pair("https://GOOGLE.com:443").await;
        let second = service.create_url_pair("https://google.com/").await;

        assert_eq!(first.unwrap(), second.unwrap());
    }

    #[tokio::test]
    async fn test_create_url_pair_propagates_conflict() {
        let mut mock_repo = MockPairRepository::new();

        mock_repo.expect_insert().times(1).returning(|_| {
            Err(AppError::already_exists(
                "URL pair already exists",
                json!({}),
            ))
        });

        let service = ShortenerService::new(Arc::new(mock_repo));

        let result = service.create_url_pair("https://google.com").await;
        assert!(matches!(result, Err(AppError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_create_url_pair_invalid_url_skips_storage() {
        let mut mock_repo = MockPairRepository::new();
        mock_repo.expect_insert().times(0);

        let service = ShortenerService::new(Arc::new(mock_repo));

        let result = service.create_url_pair("ya.ru").await;
        assert!(matches!(result, Err(AppError::InvalidInput { .. })));
    }

    #[tokio::test]
    async fn test_resolve_short_code() {
        let mut mock_repo = MockPairRepository::new();

        mock_repo
            .expect_find_original_by_code()
            .withf(|code| code == "46plOCsbuD")
            .times(1)
            .returning(|_| Ok("https://google.com/".to_string()));

        let service = ShortenerService::new(Arc::new(mock_repo));

        let url = service.resolve_short_code("46plOCsbuD").await.unwrap();
        assert_eq!(url, "https://google.com/");
    }

    #[tokio::test]
    async fn test_resolve_short_code_not_found() {
        let mut mock_repo = MockPairRepository::new();

        mock_repo
            .expect_find_original_by_code()
            .times(1)
            .returning(|code| Err(AppError::not_found("not found", json!({ "code": code }))));

        let service = ShortenerService::new(Arc::new(mock_repo));

        let result = service.resolve_short_code("nonexistent").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_pair_by_code() {
        let mut mock_repo = MockPairRepository::new();

        mock_repo
            .expect_delete_by_code()
            .withf(|code| code == "46plOCsbuD")
            .times(1)
            .returning(|_| Ok(()));
        mock_repo.expect_delete_by_original_url().times(0);

        let service = ShortenerService::new(Arc::new(mock_repo));

        assert!(service.delete_pair("46plOCsbuD").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_pair_by_url_normalizes() {
        let mut mock_repo = MockPairRepository::new();

        mock_repo
            .expect_delete_by_original_url()
            .withf(|url| url == "https://google.com/")
            .times(1)
            .returning(|_| Ok(()));
        mock_repo.expect_delete_by_code().times(0);

        let service = ShortenerService::new(Arc::new(mock_repo));

        assert!(service.delete_pair("https://google.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_pair_malformed_url() {
        let mut mock_repo = MockPairRepository::new();
        mock_repo.expect_delete_by_original_url().times(0);
        mock_repo.expect_delete_by_code().times(0);

        let service = ShortenerService::new(Arc::new(mock_repo));

        let result = service.delete_pair("ftp://files.example.com").await;
        assert!(matches!(result, Err(AppError::InvalidInput { .. })));
    }

    #[tokio::test]
    async fn test_delete_pair_not_found() {
        let mut mock_repo = MockPairRepository::new();

        mock_repo
            .expect_delete_by_code()
            .times(1)
            .returning(|_| Err(AppError::not_found("not found", json!({}))));

        let service = ShortenerService::new(Arc::new(mock_repo));

        let result = service.delete_pair("NON_EXIST").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_pairs() {
        let mut mock_repo = MockPairRepository::new();

        mock_repo.expect_list_all().times(1).returning(|| {
            Ok(vec![
                create_test_pair(1, "https://google.com/", "46plOCsbuD"),
                create_test_pair(2, "https://ya.ru/", "abc"),
            ])
        });

        let service = ShortenerService::new(Arc::new(mock_repo));

        let pairs = service.list_pairs().await.unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].short_code, "46plOCsbuD");
    }
}

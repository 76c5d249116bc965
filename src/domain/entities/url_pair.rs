//! URL pair entity: the association between an original URL and its short code.

use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::utils::code_generator::validate_short_code;
use crate::utils::url_normalizer::normalize_url;

/// A stored (original URL, short code) pair.
///
/// Pairs are immutable: they are inserted and deleted whole, never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPair {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl UrlPair {
    /// Creates a new UrlPair instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
        }
    }
}

/// Input data for inserting a new pair.
///
/// Can only be built through [`NewUrlPair::new`], which guarantees that the URL
/// is in normalized absolute form and the code fits the storage bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlPair {
    original_url: String,
    short_code: String,
}

impl NewUrlPair {
    /// Validates and builds a pair ready for insertion.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if the URL is not an absolute http(s) URL
    /// or the code is empty, longer than 10 characters or not alphanumeric.
    pub fn new(original_url: &str, short_code: impl Into<String>) -> Result<Self, AppError> {
        let original_url = normalize_url(original_url)?;

        let short_code = short_code.into();
        validate_short_code(&short_code)?;

        Ok(Self {
            original_url,
            short_code,
        })
    }

    pub fn original_url(&self) -> &str {
        &self.original_url
    }

    pub fn short_code(&self) -> &str {
        &self.short_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_pair_creation() {
        let now = Utc::now();
        let pair = UrlPair::new(
            1,
            "https://google.com/".to_string(),
            "tg1f2".to_string(),
            now,
        );

        assert_eq!(pair.id, 1);
        assert_eq!(pair.original_url, "https://google.com/");
        assert_eq!(pair.short_code, "tg1f2");
        assert_eq!(pair.created_at, now);
    }

    #[test]
    fn test_new_url_pair_normalizes_url() {
        let pair = NewUrlPair::new("https://google.com", "tg1f2").unwrap();

        assert_eq!(pair.original_url(), "https://google.com/");
        assert_eq!(pair.short_code(), "tg1f2");
    }

    #[test]
    fn test_new_url_pair_rejects_relative_url() {
        let result = NewUrlPair::new("1vbckbo", "ihsihvs");
        assert!(matches!(result, Err(AppError::InvalidInput { .. })));
    }

    #[test]
    fn test_new_url_pair_rejects_empty_code() {
        let result = NewUrlPair::new("https://google.com", "");
        assert!(matches!(result, Err(AppError::InvalidInput { .. })));
    }

    #[test]
    fn test_new_url_pair_rejects_long_code() {
        let result = NewUrlPair::new("https://google.com", "t".repeat(11));
        assert!(matches!(result, Err(AppError::InvalidInput { .. })));
    }
}

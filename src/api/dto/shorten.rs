//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be an absolute URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Response carrying the code of the created pair.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_request_accepts_absolute_url() {
        let request = ShortenRequest {
            url: "https://google.com".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_shorten_request_rejects_missing_scheme() {
        let request = ShortenRequest {
            url: "google.com".to_string(),
        };
        assert!(request.validate().is_err());
    }
}

//! DTO for listing stored pairs.

use serde::Serialize;

use crate::domain::entities::UrlPair;

/// One stored pair as returned by `GET /all`.
#[derive(Debug, Serialize)]
pub struct PairResponse {
    pub original_url: String,
    pub short_code: String,
}

impl From<UrlPair> for PairResponse {
    fn from(pair: UrlPair) -> Self {
        Self {
            original_url: pair.original_url,
            short_code: pair.short_code,
        }
    }
}

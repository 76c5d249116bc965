//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::infrastructure::persistence::SqlitePairRepository;

/// Shortener service backed by the SQLite pair store.
pub type SqliteShortenerService = ShortenerService<SqlitePairRepository>;

#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<SqliteShortenerService>,
}

impl AppState {
    pub fn new(shortener_service: Arc<SqliteShortenerService>) -> Self {
        Self { shortener_service }
    }
}

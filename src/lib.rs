//! # URL Pair Shortener
//!
//! A deterministic URL shortening service built with Axum and SQLite.
//!
//! Every original URL maps to exactly one short code, derived from a SHA-384
//! digest of the normalized URL. Shortening the same URL twice yields the same
//! code, and the second attempt is rejected as a duplicate.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - URL pair entities and the repository trait
//! - **Application Layer** ([`application`]) - Shortening, resolution and deletion
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pair store
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//! - **Bot** ([`bot`]) - Chat command front-end over the same service
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://shortener.db"
//! export PUBLIC_BASE_URL="https://s.example.com"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod bot;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::entities::{NewUrlPair, UrlPair};
    pub use crate::domain::repositories::PairRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqlitePairRepository;
    pub use crate::state::AppState;
}

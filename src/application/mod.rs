//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a transport-independent API
//! for the HTTP handlers, the chat bot and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - URL pair creation, lookup and deletion

pub mod services;

//! Domain layer containing business entities and repository contracts.
//!
//! This module is independent of infrastructure and presentation concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Shortening Flow
//!
//! 1. A transport (HTTP handler, chat bot, admin CLI) calls the
//!    [`crate::application::services::ShortenerService`]
//! 2. The service normalizes the URL and derives its code
//!    ([`crate::utils::code_generator::generate_code`])
//! 3. The pair is persisted via [`repositories::PairRepository`], whose unique
//!    constraints are the only arbiter between concurrent requests

pub mod entities;
pub mod repositories;

//! Core domain entities representing the business data model.
//!
//! The service stores exactly one kind of record, the URL pair:
//!
//! - [`UrlPair`] - A stored pair as read back from the store
//! - [`NewUrlPair`] - A validated pair ready for insertion

pub mod url_pair;

pub use url_pair::{NewUrlPair, UrlPair};

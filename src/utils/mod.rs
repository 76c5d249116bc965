//! Utility functions for code generation and URL processing.
//!
//! - [`code_generator`] - Deterministic short code derivation and validation
//! - [`url_normalizer`] - URL normalization and sanitization

pub mod code_generator;
pub mod url_normalizer;

//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for service tests.
//!
//! # Available Repositories
//!
//! - [`PairRepository`] - URL pair storage
//!
//! # Testing
//!
//! See integration tests in `tests/repository_pair.rs` for usage examples.

pub mod pair_repository;

pub use pair_repository::PairRepository;

#[cfg(test)]
pub use pair_repository::MockPairRepository;

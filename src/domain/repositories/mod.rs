//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; implementations live in
//! `crate::infrastructure::persistence`, and mock implementations are
//! generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`ProductRepository`] - Read-only product lookups
//!
//! # Testing
//!
//! See integration tests in `tests/repository_product.rs` for usage examples.

pub mod product_repository;

pub use product_repository::ProductRepository;

#[cfg(test)]
pub use product_repository::MockProductRepository;

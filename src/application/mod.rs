//! Application layer services implementing business logic.
//!
//! Services consume repository and cache traits and provide a clean API for
//! HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::product_service::ProductService`] - Cached lookups and price-sorted listings

pub mod services;

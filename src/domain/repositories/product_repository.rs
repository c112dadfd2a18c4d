//! Repository trait for product data access.

use crate::domain::entities::Product;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only repository interface for products.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProductRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_product.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Finds a product by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Product))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Lists every product of a restaurant, ordered by id.
    ///
    /// Returns an empty vector when the restaurant has no products.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_restaurant(&self, restaurant_id: i64) -> Result<Vec<Product>, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the round-trip fails.
    async fn ping(&self) -> Result<(), AppError>;
}

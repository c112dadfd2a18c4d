//! Cache trait and error types.

use async_trait::async_trait;

use crate::api::dto::product::ProductResponse;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
    #[error("Cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Cache of product responses keyed by product identifier.
///
/// Implementations must be thread-safe. Entries are bounded in lifetime: a
/// cached response may be served after the underlying row changed, but only
/// until it expires or is invalidated.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process LRU with TTL
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait ProductCache: Send + Sync {
    /// Short backend name used in logs and health output.
    fn backend(&self) -> &'static str;

    /// Retrieves a cached product.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(product))` on cache hit
    /// - `Ok(None)` on cache miss or expired entry
    async fn get(&self, product_id: i64) -> CacheResult<Option<ProductResponse>>;

    /// Stores a product, replacing any previous entry for the same id.
    async fn set(&self, product_id: i64, product: &ProductResponse) -> CacheResult<()>;

    /// Removes a cached product. Removing a missing entry is not an error.
    async fn invalidate(&self, product_id: i64) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;
}

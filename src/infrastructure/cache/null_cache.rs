//! No-op cache implementation for testing or disabled caching.

use super::service::{CacheResult, ProductCache};
use crate::api::dto::product::ProductResponse;
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Every lookup misses, so each request reads the database. Selected with
/// `CACHE_BACKEND=none` and used as the fallback when Redis is unreachable.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductCache for NullCache {
    fn backend(&self) -> &'static str {
        "none"
    }

    async fn get(&self, _product_id: i64) -> CacheResult<Option<ProductResponse>> {
        Ok(None)
    }

    async fn set(&self, _product_id: i64, _product: &ProductResponse) -> CacheResult<()> {
        Ok(())
    }

    async fn invalidate(&self, _product_id: i64) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

//! In-process LRU cache with per-entry expiry.

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use parking_lot::Mutex;
use tracing::debug;

use super::service::{CacheResult, ProductCache};
use crate::api::dto::product::ProductResponse;

struct Entry {
    product: ProductResponse,
    inserted_at: Instant,
}

/// Bounded in-memory product cache.
///
/// Holds at most `capacity` products, evicting the least recently used one
/// when full. Entries older than `ttl` are dropped on the next read.
pub struct MemoryCache {
    entries: Mutex<LruCache<i64, Entry>>,
    ttl: Duration,
}

impl MemoryCache {
    pub fn new(capacity: NonZeroUsize, ttl: Duration) -> Self {
        debug!(
            "Using MemoryCache (capacity: {}, TTL: {}s)",
            capacity,
            ttl.as_secs()
        );
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    /// Number of entries currently held, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ProductCache for MemoryCache {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, product_id: i64) -> CacheResult<Option<ProductResponse>> {
        let mut entries = self.entries.lock();

        let expired = match entries.get(&product_id) {
            Some(entry) if entry.inserted_at.elapsed() < self.ttl => {
                return Ok(Some(entry.product.clone()));
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            entries.pop(&product_id);
            debug!("Cache EXPIRED: product {}", product_id);
        }

        Ok(None)
    }

    async fn set(&self, product_id: i64, product: &ProductResponse) -> CacheResult<()> {
        let evicted = self.entries.lock().push(
            product_id,
            Entry {
                product: product.clone(),
                inserted_at: Instant::now(),
            },
        );

        if let Some((evicted_id, _)) = evicted
            && evicted_id != product_id
        {
            debug!("Cache EVICT: product {}", evicted_id);
        }

        Ok(())
    }

    async fn invalidate(&self, product_id: i64) -> CacheResult<()> {
        if self.entries.lock().pop(&product_id).is_some() {
            debug!("Cache INVALIDATE: product {}", product_id);
        }
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: i64, price: i64) -> ProductResponse {
        ProductResponse {
            id,
            restaurant_id: 1,
            name: format!("product-{id}"),
            description: None,
            price: Decimal::new(price, 0),
            image_url: None,
            is_available: true,
        }
    }

    fn cache(capacity: usize, ttl: Duration) -> MemoryCache {
        MemoryCache::new(NonZeroUsize::new(capacity).unwrap(), ttl)
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let cache = cache(10, Duration::from_secs(60));
        cache.set(1, &product(1, 10)).await.unwrap();

        let hit = cache.get(1).await.unwrap();
        assert_eq!(hit, Some(product(1, 10)));
        assert_eq!(cache.get(2).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_capacity_evicts_least_recently_used() {
        let cache = cache(2, Duration::from_secs(60));
        cache.set(1, &product(1, 10)).await.unwrap();
        cache.set(2, &product(2, 20)).await.unwrap();

        // Touch 1 so that 2 becomes the eviction candidate.
        assert!(cache.get(1).await.unwrap().is_some());
        cache.set(3, &product(3, 30)).await.unwrap();

        assert_eq!(cache.len(), 2);
        assert!(cache.get(1).await.unwrap().is_some());
        assert!(cache.get(2).await.unwrap().is_none());
        assert!(cache.get(3).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_expired_entry_is_dropped() {
        let cache = cache(10, Duration::ZERO);
        cache.set(1, &product(1, 10)).await.unwrap();
        assert_eq!(cache.len(), 1);

        assert!(cache.get(1).await.unwrap().is_none());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_invalidate() {
        let cache = cache(10, Duration::from_secs(60));
        cache.set(1, &product(1, 10)).await.unwrap();

        cache.invalidate(1).await.unwrap();
        cache.invalidate(42).await.unwrap();

        assert!(cache.get(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_replaces_existing_entry() {
        let cache = cache(10, Duration::from_secs(60));
        cache.set(1, &product(1, 10)).await.unwrap();
        cache.set(1, &product(1, 15)).await.unwrap();

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(1).await.unwrap().unwrap().price, Decimal::new(15, 0));
    }
}

//! Redis-backed product cache.

use super::service::{CacheError, CacheResult, ProductCache};
use crate::api::dto::product::ProductResponse;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

/// Redis cache storing products as JSON under `product:{id}`.
///
/// Uses `ConnectionManager` for connection reuse and reconnects.
/// Read and write failures are logged and degrade to a cache miss.
pub struct RedisCache {
    client: ConnectionManager,
    ttl_seconds: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `ttl_seconds` - expiry applied to every cached product (`CACHE_TTL_SECONDS`)
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            ttl_seconds,
            key_prefix: "product:".to_string(),
        })
    }

    fn build_key(&self, product_id: i64) -> String {
        format!("{}{}", self.key_prefix, product_id)
    }
}

#[async_trait]
impl ProductCache for RedisCache {
    fn backend(&self) -> &'static str {
        "redis"
    }

    async fn get(&self, product_id: i64) -> CacheResult<Option<ProductResponse>> {
        let key = self.build_key(product_id);
        let mut conn = self.client.clone();

        let payload = match conn.get::<_, Option<String>>(&key).await {
            Ok(payload) => payload,
            Err(e) => {
                error!("Redis GET error for {}: {}", key, e);
                return Ok(None);
            }
        };

        let Some(payload) = payload else {
            return Ok(None);
        };

        match serde_json::from_str(&payload) {
            Ok(product) => Ok(Some(product)),
            Err(e) => {
                warn!("Discarding undecodable cache entry {}: {}", key, e);
                Ok(None)
            }
        }
    }

    async fn set(&self, product_id: i64, product: &ProductResponse) -> CacheResult<()> {
        let key = self.build_key(product_id);
        let payload = serde_json::to_string(product)?;
        let mut conn = self.client.clone();

        match conn
            .set_ex::<_, _, ()>(&key, payload, self.ttl_seconds)
            .await
        {
            Ok(_) => {
                debug!("Cache SET: {} (TTL: {}s)", key, self.ttl_seconds);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", key, e);
                Ok(())
            }
        }
    }

    async fn invalidate(&self, product_id: i64) -> CacheResult<()> {
        let key = self.build_key(product_id);
        let mut conn = self.client.clone();

        conn.del::<_, i32>(&key)
            .await
            .map(|deleted| {
                if deleted > 0 {
                    debug!("Cache INVALIDATE: {}", key);
                }
            })
            .map_err(|e| CacheError::OperationError(format!("Redis DEL failed: {}", e)))
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}

//! Caching layer for product lookups by identifier.
//!
//! Provides a [`ProductCache`] trait with three implementations:
//! - [`MemoryCache`] - Process-local LRU with per-entry TTL (default)
//! - [`RedisCache`] - Shared Redis-backed cache
//! - [`NullCache`] - No-op implementation for testing/disabled caching

mod memory_cache;
mod null_cache;
mod redis_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, ProductCache};

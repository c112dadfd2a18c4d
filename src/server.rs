//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, and the Axum server lifecycle.

use crate::api::middleware::rate_limit;
use crate::application::services::ProductService;
use crate::config::{CacheBackend, Config};
use crate::infrastructure::cache::{MemoryCache, NullCache, ProductCache, RedisCache};
use crate::infrastructure::persistence::PgProductRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (retried with backoff)
/// - Reference migrations, when `RUN_MIGRATIONS` is set
/// - Product cache for the configured backend
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails after all retries
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    if config.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;
        tracing::info!("Migrations applied");
    }

    let cache = build_cache(&config).await;
    let state = build_state(pool, cache);

    let limiter = rate_limit::layer(config.rate_limit_replenish_ms, config.rate_limit_burst)?;
    let app = app_router(state, Some(limiter));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Opens the PostgreSQL pool, retrying with exponential backoff.
///
/// # Errors
///
/// Returns the last connection error once `DB_CONNECT_RETRIES` attempts failed.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime));

    let strategy = ExponentialBackoff::from_millis(100)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(config.db_connect_retries.saturating_sub(1));

    Retry::spawn(strategy, || {
        let options = options.clone();
        async move {
            options
                .connect(&config.database_url)
                .await
                .inspect_err(|e| tracing::warn!("Database connection attempt failed: {}", e))
        }
    })
    .await
    .context("Failed to connect to database")
}

/// Builds the product cache selected by `CACHE_BACKEND`.
///
/// Falls back to [`NullCache`] when Redis is selected but unreachable, so the
/// service still answers from the database.
pub async fn build_cache(config: &Config) -> Arc<dyn ProductCache> {
    let ttl_seconds = config.cache_ttl_seconds;

    match config.cache_backend {
        CacheBackend::Memory => match NonZeroUsize::new(config.cache_capacity) {
            Some(capacity) => {
                tracing::info!("Cache enabled (memory)");
                Arc::new(MemoryCache::new(capacity, Duration::from_secs(ttl_seconds)))
            }
            None => {
                tracing::warn!("CACHE_CAPACITY is 0. Using NullCache.");
                Arc::new(NullCache::new())
            }
        },
        CacheBackend::Redis => {
            let Some(redis_url) = config.redis_url.as_deref() else {
                tracing::warn!("Redis cache selected without REDIS_URL. Using NullCache.");
                return Arc::new(NullCache::new());
            };

            match RedisCache::connect(redis_url, ttl_seconds).await {
                Ok(redis) => {
                    tracing::info!("Cache enabled (Redis)");
                    Arc::new(redis)
                }
                Err(e) => {
                    tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                    Arc::new(NullCache::new())
                }
            }
        }
        CacheBackend::None => {
            tracing::info!("Cache disabled (NullCache)");
            Arc::new(NullCache::new())
        }
    }
}

/// Wires repositories and services into the shared [`AppState`].
pub fn build_state(pool: PgPool, cache: Arc<dyn ProductCache>) -> AppState {
    let repository = Arc::new(PgProductRepository::new(Arc::new(pool)));
    let product_service = Arc::new(ProductService::new(repository, cache.clone()));

    AppState::new(product_service, cache)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

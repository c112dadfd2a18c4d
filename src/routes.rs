//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /products/sorted`        - Restaurant products ordered by price
//! - `GET /products/{product_id}`  - Single product (cached)
//! - `GET /health`                 - Health check: database and cache
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/products`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::rate_limit::RateLimitLayer;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit` - limiter applied to the product routes; `None` disables
///   limiting (the limiter needs `ConnectInfo`, which in-process test clients
///   don't provide)
pub fn app_router(state: AppState, rate_limit: Option<RateLimitLayer>) -> NormalizePath<Router> {
    let mut product_router = api::routes::product_routes();
    if let Some(limiter) = rate_limit {
        product_router = product_router.layer(limiter);
    }

    let router = Router::new()
        .nest("/products", product_router)
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

//! Per-client rate limiting using the token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Type of the layer returned by [`layer`].
pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a rate limiter for the product endpoints.
///
/// Each client IP holds up to `burst` tokens and regains one every
/// `replenish_ms` milliseconds.
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// Keys are taken from the socket peer address, so the router must be served
/// with `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error if `replenish_ms` or `burst` is zero.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/products", product_routes())
///     .layer(rate_limit::layer(100, 100)?);
/// ```
pub fn layer(replenish_ms: u64, burst: u32) -> Result<RateLimitLayer> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(replenish_ms)
        .burst_size(burst)
        .finish()
        .context("Rate limit values must be greater than zero")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

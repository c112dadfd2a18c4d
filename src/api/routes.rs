//! API route configuration.

use crate::api::handlers::{get_product_handler, sorted_products_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Product routes, mounted under `/products`.
///
/// # Endpoints
///
/// - `GET /sorted`       - Restaurant products ordered by price
/// - `GET /{product_id}` - Single product (cached)
///
/// The static `/sorted` segment takes precedence over the `{product_id}`
/// capture.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/sorted", get(sorted_products_handler))
        .route("/{product_id}", get(get_product_handler))
}

//! Handlers for the product endpoints.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use serde_json::json;

use crate::api::dto::product::{ProductResponse, SortedProductsParams};
use crate::error::AppError;
use crate::state::AppState;

/// Returns one product by identifier.
///
/// # Endpoint
///
/// `GET /products/{product_id}`
///
/// Served from the product cache when present; see
/// [`crate::application::services::ProductService::get_product`].
///
/// # Errors
///
/// Returns 400 Bad Request if `product_id` is not an integer.
/// Returns 404 Not Found if no product has this id, zero and negative ids
/// included.
pub async fn get_product_handler(
    State(state): State<AppState>,
    product_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ProductResponse>, AppError> {
    let Path(product_id) = product_id.map_err(|e| {
        AppError::bad_request(
            "product_id must be an integer",
            json!({ "reason": e.body_text() }),
        )
    })?;

    let product = state.product_service.get_product(product_id).await?;

    Ok(Json(product))
}

/// Lists a restaurant's products ordered by price.
///
/// # Endpoint
///
/// `GET /products/sorted?restaurant_id=1&order=high_to_low`
///
/// # Query Parameters
///
/// - `restaurant_id` (required): integer
/// - `order` (required): `high_to_low` or `low_to_high`
///
/// # Response
///
/// ```json
/// [
///   { "id": 2, "restaurant_id": 1, "name": "Steak", "price": 30.0, ... },
///   { "id": 3, "restaurant_id": 1, "name": "Pasta", "price": 20.0, ... }
/// ]
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid `order` or a missing or
/// non-integer `restaurant_id`.
/// Returns 404 Not Found if the restaurant has no products.
pub async fn sorted_products_handler(
    State(state): State<AppState>,
    params: Result<Query<SortedProductsParams>, QueryRejection>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let Query(params) = params.map_err(|e| {
        AppError::bad_request(
            "Invalid query parameters",
            json!({ "reason": e.body_text() }),
        )
    })?;

    let (restaurant_id, order) = params.into_parts()?;

    let products = state
        .product_service
        .list_sorted(restaurant_id, order)
        .await?;

    Ok(Json(products))
}

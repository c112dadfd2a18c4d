//! DTOs for the product endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::entities::{Product, SortOrder};
use crate::error::AppError;

/// Public representation of a product.
///
/// Also the value stored by [`crate::infrastructure::cache::ProductCache`]
/// implementations, hence `Deserialize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub restaurant_id: i64,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image_url: Option<String>,
    pub is_available: bool,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            restaurant_id: product.restaurant_id,
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
            is_available: product.is_available,
        }
    }
}

/// Query parameters of `GET /products/sorted`, as sent by the client.
///
/// Both fields are kept as raw text so that a malformed `restaurant_id` can't
/// mask an invalid `order`; [`SortedProductsParams::into_parts`] checks them
/// in that order.
#[derive(Debug, Deserialize)]
pub struct SortedProductsParams {
    #[serde(default)]
    pub order: Option<String>,

    #[serde(default)]
    pub restaurant_id: Option<String>,
}

impl SortedProductsParams {
    /// Parses the requested order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `order` is missing or is not
    /// `high_to_low` / `low_to_high`.
    pub fn sort_order(&self) -> Result<SortOrder, AppError> {
        self.order
            .as_deref()
            .unwrap_or_default()
            .parse::<SortOrder>()
            .map_err(|_| {
                AppError::bad_request(
                    "Invalid order param. Use 'high_to_low' or 'low_to_high'",
                    json!({ "order": self.order }),
                )
            })
    }

    /// Validates the parameters and returns `(restaurant_id, order)`.
    ///
    /// The order is checked first, so an invalid order is reported whatever
    /// the restaurant id is. Any integer is accepted as a restaurant id; one
    /// without products is reported by the listing as not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on an invalid order or restaurant id.
    pub fn into_parts(self) -> Result<(i64, SortOrder), AppError> {
        let order = self.sort_order()?;

        let raw = self
            .restaurant_id
            .as_deref()
            .ok_or_else(|| AppError::bad_request("restaurant_id is required", json!({})))?;

        let restaurant_id = raw.trim().parse::<i64>().map_err(|_| {
            AppError::bad_request(
                "restaurant_id must be an integer",
                json!({ "restaurant_id": raw }),
            )
        })?;

        Ok((restaurant_id, order))
    }
}

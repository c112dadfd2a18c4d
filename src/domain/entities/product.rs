//! Product entity as stored in the `products` table.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// A product offered by a restaurant.
///
/// Rows are created and maintained by an external system; the service only
/// reads them.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub restaurant_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new Product instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        restaurant_id: i64,
        name: String,
        description: Option<String>,
        price: Decimal,
        image_url: Option<String>,
        is_available: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            restaurant_id,
            name,
            description,
            price,
            image_url,
            is_available,
            created_at,
            updated_at,
        }
    }
}

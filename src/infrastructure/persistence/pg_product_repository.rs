//! PostgreSQL implementation of the product repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Product;
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

const PRODUCT_COLUMNS: &str = "id, restaurant_id, name, description, price, image_url, \
                               is_available, created_at, updated_at";

/// PostgreSQL repository for product lookups.
///
/// Queries are bound parameters mapped through [`sqlx::FromRow`].
pub struct PgProductRepository {
    pool: Arc<PgPool>,
}

impl PgProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(product)
    }

    async fn find_by_restaurant(&self, restaurant_id: i64) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE restaurant_id = $1 ORDER BY id"
        ))
        .bind(restaurant_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(products)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}

//! Product lookup and price-sorted listing service.

use std::sync::Arc;

use metrics::counter;
use serde_json::json;
use tracing::{debug, warn};

use crate::api::dto::product::ProductResponse;
use crate::domain::entities::SortOrder;
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;
use crate::infrastructure::cache::ProductCache;

/// Service answering the two product queries.
///
/// Owns its cache explicitly; the cache is consulted only for lookups by id.
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
    cache: Arc<dyn ProductCache>,
}

impl ProductService {
    /// Creates a new product service.
    pub fn new(repository: Arc<dyn ProductRepository>, cache: Arc<dyn ProductCache>) -> Self {
        Self { repository, cache }
    }

    /// Returns a product by id, serving it from the cache when possible.
    ///
    /// # Cache Strategy
    ///
    /// - **Hit**: returned without touching the database
    /// - **Miss**: read from the database, then stored in the cache
    /// - **Cache error**: logged and treated as a miss
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_product(&self, product_id: i64) -> Result<ProductResponse, AppError> {
        match self.cache.get(product_id).await {
            Ok(Some(cached)) => {
                debug!("Cache HIT for product {}", product_id);
                counter!("product_cache_hits_total").increment(1);
                return Ok(cached);
            }
            Ok(None) => {
                debug!("Cache MISS for product {}", product_id);
                counter!("product_cache_misses_total").increment(1);
            }
            Err(e) => {
                warn!("Cache error for product {}: {}", product_id, e);
                counter!("product_cache_errors_total").increment(1);
            }
        }

        let product = self
            .repository
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Product not found", json!({ "product_id": product_id }))
            })?;

        let response = ProductResponse::from(product);

        if let Err(e) = self.cache.set(product_id, &response).await {
            warn!("Failed to cache product {}: {}", product_id, e);
        }

        Ok(response)
    }

    /// Lists every product of a restaurant ordered by price.
    ///
    /// Products with equal prices keep the repository order (ascending id).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the restaurant has no products.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_sorted(
        &self,
        restaurant_id: i64,
        order: SortOrder,
    ) -> Result<Vec<ProductResponse>, AppError> {
        let mut products = self.repository.find_by_restaurant(restaurant_id).await?;

        if products.is_empty() {
            return Err(AppError::not_found(
                "No products found",
                json!({ "restaurant_id": restaurant_id }),
            ));
        }

        products.sort_by(|a, b| order.compare(&a.price, &b.price));

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    /// Drops a product from the cache so that the next lookup reads the database.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the cache backend rejects the removal.
    pub async fn invalidate_cached(&self, product_id: i64) -> Result<(), AppError> {
        self.cache.invalidate(product_id).await.map_err(|e| {
            AppError::internal(
                "Failed to invalidate cache entry",
                json!({ "product_id": product_id, "reason": e.to_string() }),
            )
        })
    }

    /// Checks that the product store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database round-trip fails.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use chrono::Utc;
use parking_lot::RwLock;
use product_catalog::application::services::ProductService;
use product_catalog::domain::entities::Product;
use product_catalog::domain::repositories::ProductRepository;
use product_catalog::error::AppError;
use product_catalog::infrastructure::cache::{MemoryCache, ProductCache};
use product_catalog::routes::app_router;
use product_catalog::state::AppState;
use rust_decimal::Decimal;
use serde_json::json;
use sqlx::PgPool;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

/// Product table kept in memory so handler tests run without PostgreSQL.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
    lookups: AtomicUsize,
    offline: AtomicBool,
}

impl InMemoryProductRepository {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
            ..Default::default()
        }
    }

    pub fn set_price(&self, id: i64, price: Decimal) {
        if let Some(product) = self.products.write().iter_mut().find(|p| p.id == id) {
            product.price = price;
            product.updated_at = Utc::now();
        }
    }

    /// Makes every call fail as if the database were down.
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    /// Number of `find_by_id` calls that reached the repository.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn check_online(&self) -> Result<(), AppError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        self.check_online()?;
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.products.read().iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_restaurant(&self, restaurant_id: i64) -> Result<Vec<Product>, AppError> {
        self.check_online()?;
        let mut rows: Vec<Product> = self
            .products
            .read()
            .iter()
            .filter(|p| p.restaurant_id == restaurant_id)
            .cloned()
            .collect();
        rows.sort_by_key(|p| p.id);
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_online()
    }
}

pub fn product(id: i64, restaurant_id: i64, name: &str, price: i64) -> Product {
    let now = Utc::now();
    Product::new(
        id,
        restaurant_id,
        name.to_string(),
        None,
        Decimal::new(price, 0),
        None,
        true,
        now,
        now,
    )
}

/// Restaurant 1 priced [10, 30, 20], restaurant 2 with a single product.
pub fn sample_products() -> Vec<Product> {
    vec![
        product(1, 1, "Salad", 10),
        product(2, 1, "Steak", 30),
        product(3, 1, "Pasta", 20),
        product(4, 2, "Soup", 8),
    ]
}

pub fn memory_cache() -> Arc<dyn ProductCache> {
    Arc::new(MemoryCache::new(
        NonZeroUsize::new(100).unwrap(),
        Duration::from_secs(300),
    ))
}

pub fn create_test_state(
    repository: Arc<InMemoryProductRepository>,
    cache: Arc<dyn ProductCache>,
) -> AppState {
    let service = Arc::new(ProductService::new(repository, cache.clone()));
    AppState::new(service, cache)
}

/// Serves the full application router (without rate limiting).
pub fn make_server(state: AppState) -> TestServer {
    let app = Router::new().fallback_service(app_router(state, None));
    TestServer::new(app).unwrap()
}

pub async fn insert_product(pool: &PgPool, restaurant_id: i64, name: &str, price: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO products (restaurant_id, name, price) VALUES ($1, $2, $3::NUMERIC) RETURNING id",
    )
    .bind(restaurant_id)
    .bind(name)
    .bind(price)
    .fetch_one(pool)
    .await
    .unwrap()
}

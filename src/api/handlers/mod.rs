//! HTTP request handlers for API endpoints.

pub mod health;
pub mod products;

pub use health::health_handler;
pub use products::{get_product_handler, sorted_products_handler};

//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ProductService;
use crate::infrastructure::cache::ProductCache;

/// State cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<ProductService>,
    pub cache: Arc<dyn ProductCache>,
}

impl AppState {
    pub fn new(product_service: Arc<ProductService>, cache: Arc<dyn ProductCache>) -> Self {
        Self {
            product_service,
            cache,
        }
    }
}

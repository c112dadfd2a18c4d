//! Core domain entities representing the catalog data model.
//!
//! Entities are plain data structures mirroring what the store holds; the
//! transport projection lives in [`crate::api::dto::product`].
//!
//! # Entity Types
//!
//! - [`Product`] - A product row owned by a restaurant
//! - [`SortOrder`] - Requested price ordering for restaurant listings

pub mod product;
pub mod sort_order;

pub use product::Product;
pub use sort_order::{InvalidSortOrder, SortOrder};

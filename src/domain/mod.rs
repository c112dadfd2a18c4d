//! Domain layer containing catalog entities and data access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; business rules live in [`crate::application::services`].

pub mod entities;
pub mod repositories;

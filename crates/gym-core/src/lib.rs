//! # Gym Core
//!
//! Domain entities, the storage error type, and repository traits.

pub mod domain;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::StoreError;

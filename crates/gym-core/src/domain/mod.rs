//! # Gym Core - Domain Module
//!
//! Domain entities for the gym API.

pub mod tenant;
pub mod user;
pub mod class;

// Re-export all entities and enums
pub use tenant::{Tenant, NewTenant, TenantStatus};
pub use user::{User, NewUser, PublicUser, UserUpdate, Role};
pub use class::{Class, NewClass};

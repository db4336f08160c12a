//! # Gym Infrastructure
//!
//! PostgreSQL adapters for the repository traits in `gym-core`.

pub mod database;

pub use database::{
    create_pool, run_migrations, PgClassRepository, PgTenantRepository, PgUserRepository,
};

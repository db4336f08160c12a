//! PostgreSQL repository implementations

mod errors;
pub mod user_update;
pub mod tenant_repo_impl;
pub mod user_repo_impl;
pub mod class_repo_impl;

pub use user_update::{build_user_update, UpdateArg, UpdateStatement};
pub use tenant_repo_impl::PgTenantRepository;
pub use user_repo_impl::PgUserRepository;
pub use class_repo_impl::PgClassRepository;

//! Repository traits (ports)

pub mod tenant_repository;
pub mod user_repository;
pub mod class_repository;

pub use tenant_repository::TenantRepository;
pub use user_repository::UserRepository;
pub use class_repository::ClassRepository;

#[cfg(feature = "mock")]
pub use tenant_repository::MockTenantRepository;
#[cfg(feature = "mock")]
pub use user_repository::MockUserRepository;
#[cfg(feature = "mock")]
pub use class_repository::MockClassRepository;

//! Tenant repository trait (port)

use async_trait::async_trait;

use crate::domain::{NewTenant, Tenant};
use crate::error::StoreError;

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Fails with `UniqueViolation` when the subdomain is taken.
    async fn create(&self, tenant: &NewTenant) -> Result<Tenant, StoreError>;
}

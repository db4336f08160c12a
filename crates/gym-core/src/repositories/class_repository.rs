//! Class repository trait (port)

use async_trait::async_trait;
use gym_shared::{ClassId, TenantId};

use crate::domain::{Class, NewClass};
use crate::error::StoreError;

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait ClassRepository: Send + Sync {
    async fn create(&self, tenant_id: TenantId, class: &NewClass) -> Result<Class, StoreError>;
    async fn find_by_id(&self, tenant_id: TenantId, class_id: ClassId) -> Result<Class, StoreError>;
    async fn delete(&self, tenant_id: TenantId, class_id: ClassId) -> Result<(), StoreError>;
    async fn list(&self, tenant_id: TenantId) -> Result<Vec<Class>, StoreError>;
}

//! User repository trait (port)
//!
//! Every operation is scoped by tenant: a user id that exists under another
//! tenant is reported as `NotFound`.

use async_trait::async_trait;
use gym_shared::{TenantId, UserId};

use crate::domain::{NewUser, User, UserUpdate};
use crate::error::StoreError;

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, tenant_id: TenantId, user: &NewUser) -> Result<User, StoreError>;
    async fn find_by_id(&self, tenant_id: TenantId, user_id: UserId) -> Result<User, StoreError>;
    /// Applies only the fields present in `update`.
    async fn update(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
        update: &UserUpdate,
    ) -> Result<User, StoreError>;
    async fn delete(&self, tenant_id: TenantId, user_id: UserId) -> Result<(), StoreError>;
    async fn list(&self, tenant_id: TenantId) -> Result<Vec<User>, StoreError>;
}

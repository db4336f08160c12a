use std::sync::Arc;

use gym_core::repositories::{ClassRepository, TenantRepository, UserRepository};
use gym_security::PasswordHasher;

/// Shared handler dependencies. Cloned per request; every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub tenants: Arc<dyn TenantRepository>,
    pub users: Arc<dyn UserRepository>,
    pub classes: Arc<dyn ClassRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
}

// ============================================================================
// Gym Core - Class Entity
// File: crates/gym-core/src/domain/class.rs
// Description: Scheduled gym classes
// ============================================================================

use chrono::{DateTime, Utc};
use gym_shared::{ClassId, TenantId, UserId};
use serde::{Deserialize, Serialize};

/// Class entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub id: ClassId,
    pub tenant_id: TenantId,
    /// Cleared when the trainer's user record is deleted.
    pub trainer_id: Option<UserId>,
    pub name: String,
    pub description: String,
    pub capacity: i32,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to schedule a class. Capacity and schedule bounds are
/// enforced by storage constraints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewClass {
    #[serde(default)]
    pub trainer_id: Option<UserId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub capacity: i32,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

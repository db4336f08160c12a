// ============================================================================
// Gym Core - Tenant Entity
// File: crates/gym-core/src/domain/tenant.rs
// Description: Tenant (gym business) entity and lifecycle status
// ============================================================================

use chrono::{DateTime, Utc};
use gym_shared::TenantId;
use serde::{Deserialize, Serialize};

/// Tenant status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TenantStatus {
    #[default]
    Active,
    Suspended,
    Inactive,
}

impl TenantStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TenantStatus::Active => "active",
            TenantStatus::Suspended => "suspended",
            TenantStatus::Inactive => "inactive",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(TenantStatus::Active),
            "suspended" => Some(TenantStatus::Suspended),
            "inactive" => Some(TenantStatus::Inactive),
            _ => None,
        }
    }
}

/// Tenant entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: TenantId,
    pub business_name: String,
    pub subdomain: String,
    pub status: TenantStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to register a tenant. Status is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTenant {
    pub business_name: String,
    pub subdomain: String,
}

impl NewTenant {
    pub fn new(business_name: impl Into<String>, subdomain: impl Into<String>) -> Self {
        Self {
            business_name: business_name.into().trim().to_string(),
            subdomain: subdomain.into().trim().to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_str() {
        for status in [TenantStatus::Active, TenantStatus::Suspended, TenantStatus::Inactive] {
            assert_eq!(TenantStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(TenantStatus::from_str("closed"), None);
        assert_eq!(TenantStatus::default(), TenantStatus::Active);
    }

    #[test]
    fn test_new_tenant_normalizes_subdomain() {
        let tenant = NewTenant::new("  SwoleGym ", " SwoleGym");
        assert_eq!(tenant.business_name, "SwoleGym");
        assert_eq!(tenant.subdomain, "swolegym");
    }
}

// ============================================================================
// Gym Infrastructure - PostgreSQL Tenant Repository
// File: crates/gym-infrastructure/src/database/postgres/tenant_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;

use gym_core::domain::{NewTenant, Tenant, TenantStatus};
use gym_core::repositories::TenantRepository;
use gym_core::StoreError;

use super::errors::store_error;

pub struct PgTenantRepository {
    pool: PgPool,
}

impl PgTenantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct TenantRow {
    pub id: i32,
    pub business_name: String,
    pub subdomain: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TenantRow> for Tenant {
    fn from(row: TenantRow) -> Self {
        Tenant {
            id: row.id,
            business_name: row.business_name,
            subdomain: row.subdomain,
            status: TenantStatus::from_str(&row.status).unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl TenantRepository for PgTenantRepository {
    async fn create(&self, tenant: &NewTenant) -> Result<Tenant, StoreError> {
        let row: TenantRow = sqlx::query_as(
            r#"
            INSERT INTO tenants (business_name, subdomain)
            VALUES ($1, $2)
            RETURNING id, business_name, subdomain, status, created_at, updated_at
            "#,
        )
        .bind(&tenant.business_name)
        .bind(&tenant.subdomain)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error("create tenant"))?;

        info!(tenant_id = row.id, subdomain = %row.subdomain, "Tenant created");
        Ok(row.into())
    }
}

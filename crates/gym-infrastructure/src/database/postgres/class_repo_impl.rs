// ============================================================================
// Gym Infrastructure - PostgreSQL Class Repository
// File: crates/gym-infrastructure/src/database/postgres/class_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;

use gym_core::domain::{Class, NewClass};
use gym_core::repositories::ClassRepository;
use gym_core::StoreError;
use gym_shared::{ClassId, TenantId};

use super::errors::store_error;

const CLASS_COLUMNS: &str = "id, tenant_id, trainer_id, name, description, capacity, \
                             starts_at, ends_at, created_at, updated_at";

pub struct PgClassRepository {
    pool: PgPool,
}

impl PgClassRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ClassRow {
    pub id: i32,
    pub tenant_id: i32,
    pub trainer_id: Option<i32>,
    pub name: String,
    pub description: String,
    pub capacity: i32,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ClassRow> for Class {
    fn from(row: ClassRow) -> Self {
        Class {
            id: row.id,
            tenant_id: row.tenant_id,
            trainer_id: row.trainer_id,
            name: row.name,
            description: row.description,
            capacity: row.capacity,
            starts_at: row.starts_at,
            ends_at: row.ends_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl ClassRepository for PgClassRepository {
    async fn create(&self, tenant_id: TenantId, class: &NewClass) -> Result<Class, StoreError> {
        let sql = format!(
            "INSERT INTO classes (tenant_id, trainer_id, name, description, capacity, starts_at, ends_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
            CLASS_COLUMNS
        );

        let row: ClassRow = sqlx::query_as(&sql)
            .bind(tenant_id)
            .bind(class.trainer_id)
            .bind(&class.name)
            .bind(&class.description)
            .bind(class.capacity)
            .bind(class.starts_at)
            .bind(class.ends_at)
            .fetch_one(&self.pool)
            .await
            .map_err(store_error("create class"))?;

        info!(tenant_id, class_id = row.id, "Class created");
        Ok(row.into())
    }

    async fn find_by_id(&self, tenant_id: TenantId, class_id: ClassId) -> Result<Class, StoreError> {
        let sql = format!(
            "SELECT {} FROM classes WHERE id = $1 AND tenant_id = $2",
            CLASS_COLUMNS
        );

        let row: ClassRow = sqlx::query_as(&sql)
            .bind(class_id)
            .bind(tenant_id)
            .fetch_one(&self.pool)
            .await
            .map_err(store_error("find class by id"))?;

        Ok(row.into())
    }

    async fn delete(&self, tenant_id: TenantId, class_id: ClassId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM classes WHERE id = $1 AND tenant_id = $2")
            .bind(class_id)
            .bind(tenant_id)
            .execute(&self.pool)
            .await
            .map_err(store_error("delete class"))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        info!(tenant_id, class_id, "Class deleted");
        Ok(())
    }

    async fn list(&self, tenant_id: TenantId) -> Result<Vec<Class>, StoreError> {
        let sql = format!(
            "SELECT {} FROM classes WHERE tenant_id = $1 ORDER BY starts_at, id",
            CLASS_COLUMNS
        );

        let rows: Vec<ClassRow> = sqlx::query_as(&sql)
            .bind(tenant_id)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("list classes"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

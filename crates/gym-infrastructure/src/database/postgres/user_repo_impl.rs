// ============================================================================
// Gym Infrastructure - PostgreSQL User Repository
// File: crates/gym-infrastructure/src/database/postgres/user_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;

use gym_core::domain::{NewUser, Role, User, UserUpdate};
use gym_core::repositories::UserRepository;
use gym_core::StoreError;
use gym_shared::{TenantId, UserId};

use super::errors::store_error;
use super::user_update::{build_user_update, UpdateArg, USER_COLUMNS};

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(FromRow)]
struct UserRow {
    pub id: i32,
    pub tenant_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            tenant_id: row.tenant_id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            password: row.password,
            role: Role::from_str(&row.role).unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, tenant_id: TenantId, user: &NewUser) -> Result<User, StoreError> {
        let sql = format!(
            "INSERT INTO users (tenant_id, first_name, last_name, email, password, role) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            USER_COLUMNS
        );

        let row: UserRow = sqlx::query_as(&sql)
            .bind(tenant_id)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(&user.password)
            .bind(user.role.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(store_error("create user"))?;

        info!(tenant_id, user_id = row.id, role = %row.role, "User created");
        Ok(row.into())
    }

    async fn find_by_id(&self, tenant_id: TenantId, user_id: UserId) -> Result<User, StoreError> {
        let sql = format!(
            "SELECT {} FROM users WHERE id = $1 AND tenant_id = $2",
            USER_COLUMNS
        );

        let row: UserRow = sqlx::query_as(&sql)
            .bind(user_id)
            .bind(tenant_id)
            .fetch_one(&self.pool)
            .await
            .map_err(store_error("find user by id"))?;

        Ok(row.into())
    }

    async fn update(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
        update: &UserUpdate,
    ) -> Result<User, StoreError> {
        let statement = build_user_update(tenant_id, user_id, update)?;

        let mut query = sqlx::query_as::<_, UserRow>(&statement.sql);
        for arg in &statement.args {
            query = match *arg {
                UpdateArg::Text(value) => query.bind(value),
                UpdateArg::Id(value) => query.bind(value),
            };
        }

        let row = query
            .fetch_one(&self.pool)
            .await
            .map_err(store_error("update user"))?;

        info!(tenant_id, user_id, fields = update.present_count(), "User updated");
        Ok(row.into())
    }

    async fn delete(&self, tenant_id: TenantId, user_id: UserId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1 AND tenant_id = $2")
            .bind(user_id)
            .bind(tenant_id)
            .execute(&self.pool)
            .await
            .map_err(store_error("delete user"))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        info!(tenant_id, user_id, "User deleted");
        Ok(())
    }

    async fn list(&self, tenant_id: TenantId) -> Result<Vec<User>, StoreError> {
        let sql = format!(
            "SELECT {} FROM users WHERE tenant_id = $1 ORDER BY id",
            USER_COLUMNS
        );

        let rows: Vec<UserRow> = sqlx::query_as(&sql)
            .bind(tenant_id)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("list users"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// Gym API - Tenant Handlers
// File: crates/gym-api/src/handlers/tenants.rs
// ============================================================================
//! Tenant signup and the per-tenant resource tree

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use gym_core::{NewTenant, NewUser, PublicUser, Role};
use gym_shared::utils::mask_email;
use serde::Deserialize;
use tracing::{info, warn};

use super::{classes::ClassHandler, hash_password, users::UserHandler};
use crate::error::AppError;
use crate::extract::JsonBody;
use crate::response::SignupResponse;
use crate::state::AppState;

/// Signup payload: the business plus its first admin user.
#[derive(Deserialize)]
pub struct SignupRequest {
    pub business_name: String,
    pub subdomain: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Owns `/tenants/signup` and mounts the user and class handlers under
/// `/tenants/{tenant_id}`.
pub struct TenantHandler {
    router: Router<AppState>,
}

impl TenantHandler {
    pub fn new() -> Self {
        let tenant_scoped = UserHandler::new()
            .into_router()
            .merge(ClassHandler::new().into_router());

        let router = Router::new()
            .route("/tenants/signup", post(signup))
            .nest("/tenants/{tenant_id}", tenant_scoped);

        Self { router }
    }

    pub fn into_router(self) -> Router<AppState> {
        self.router
    }
}

impl Default for TenantHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// POST /tenants/signup
///
/// The tenant and its admin are two separate writes. If the admin cannot be
/// created the tenant stays registered and the failure is returned.
async fn signup(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    let tenant = state
        .tenants
        .create(&NewTenant::new(body.business_name, body.subdomain))
        .await?;

    let admin_email = mask_email(&body.email);
    let admin = NewUser {
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
        password: body.password,
        role: Role::Admin,
    };

    let admin = match create_admin(&state, tenant.id, admin).await {
        Ok(admin) => admin,
        Err(err) => {
            warn!(
                tenant_id = tenant.id,
                admin_email = %admin_email,
                "Tenant registered without an admin user"
            );
            return Err(err);
        }
    };

    info!(
        tenant_id = tenant.id,
        admin_id = admin.id,
        admin_email = %admin_email,
        "Tenant signed up"
    );

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "tenant registered successfully",
            tenant,
            admin,
        }),
    ))
}

async fn create_admin(
    state: &AppState,
    tenant_id: i32,
    mut admin: NewUser,
) -> Result<PublicUser, AppError> {
    admin.password = hash_password(state.hasher.clone(), admin.password).await?;
    let user = state.users.create(tenant_id, &admin).await?;
    Ok(user.into())
}

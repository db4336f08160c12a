// ============================================================================
// Gym API - User Handlers
// File: crates/gym-api/src/handlers/users.rs
// ============================================================================
//! User CRUD under `/tenants/{tenant_id}/users`

use axum::{
    extract::{OriginalUri, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use gym_core::{NewUser, PublicUser, Role, StoreError, UserUpdate};
use serde::Deserialize;

use super::{hash_password, location};
use crate::error::AppError;
use crate::extract::{JsonBody, PathParams, TenantPath, UserPath};
use crate::response::ListResponse;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

pub struct UserHandler {
    router: Router<AppState>,
}

impl UserHandler {
    pub fn new() -> Self {
        let router = Router::new()
            .route("/users", post(create_user).get(list_users))
            .route(
                "/users/{user_id}",
                get(get_user).put(update_user).delete(delete_user),
            );

        Self { router }
    }

    pub fn into_router(self) -> Router<AppState> {
        self.router
    }
}

impl Default for UserHandler {
    fn default() -> Self {
        Self::new()
    }
}

async fn create_user(
    State(state): State<AppState>,
    PathParams(path): PathParams<TenantPath>,
    OriginalUri(uri): OriginalUri,
    JsonBody(body): JsonBody<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let tenant_id = path.tenant_id()?;

    let new_user = NewUser {
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
        password: hash_password(state.hasher.clone(), body.password).await?,
        role: body.role,
    };
    let user = state.users.create(tenant_id, &new_user).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location(uri.path(), user.id))],
        Json(PublicUser::from(user)),
    ))
}

async fn get_user(
    State(state): State<AppState>,
    PathParams(path): PathParams<UserPath>,
) -> Result<Json<PublicUser>, AppError> {
    let (tenant_id, user_id) = path.ids()?;
    let user = state.users.find_by_id(tenant_id, user_id).await?;
    Ok(Json(user.into()))
}

async fn update_user(
    State(state): State<AppState>,
    PathParams(path): PathParams<UserPath>,
    JsonBody(mut update): JsonBody<UserUpdate>,
) -> Result<Json<PublicUser>, AppError> {
    let (tenant_id, user_id) = path.ids()?;
    if update.is_empty() {
        return Err(StoreError::EmptyUpdate.into());
    }

    if let Some(password) = update.password.take() {
        update.password = Some(hash_password(state.hasher.clone(), password).await?);
    }

    let user = state.users.update(tenant_id, user_id, &update).await?;
    Ok(Json(user.into()))
}

async fn delete_user(
    State(state): State<AppState>,
    PathParams(path): PathParams<UserPath>,
) -> Result<StatusCode, AppError> {
    let (tenant_id, user_id) = path.ids()?;
    state.users.delete(tenant_id, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_users(
    State(state): State<AppState>,
    PathParams(path): PathParams<TenantPath>,
) -> Result<Json<ListResponse<PublicUser>>, AppError> {
    let tenant_id = path.tenant_id()?;
    let users = state.users.list(tenant_id).await?;
    Ok(Json(users.into_iter().map(PublicUser::from).collect()))
}

// ============================================================================
// Gym API - Class Handlers
// File: crates/gym-api/src/handlers/classes.rs
// ============================================================================

use axum::{
    extract::{OriginalUri, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use gym_core::{Class, NewClass};

use super::location;
use crate::error::AppError;
use crate::extract::{ClassPath, JsonBody, PathParams, TenantPath};
use crate::response::ListResponse;
use crate::state::AppState;

pub struct ClassHandler {
    router: Router<AppState>,
}

impl ClassHandler {
    pub fn new() -> Self {
        let router = Router::new()
            .route("/classes", post(create_class).get(list_classes))
            .route("/classes/{class_id}", get(get_class).delete(delete_class));

        Self { router }
    }

    pub fn into_router(self) -> Router<AppState> {
        self.router
    }
}

impl Default for ClassHandler {
    fn default() -> Self {
        Self::new()
    }
}

async fn create_class(
    State(state): State<AppState>,
    PathParams(path): PathParams<TenantPath>,
    OriginalUri(uri): OriginalUri,
    JsonBody(body): JsonBody<NewClass>,
) -> Result<impl IntoResponse, AppError> {
    let tenant_id = path.tenant_id()?;
    let class = state.classes.create(tenant_id, &body).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location(uri.path(), class.id))],
        Json(class),
    ))
}

async fn get_class(
    State(state): State<AppState>,
    PathParams(path): PathParams<ClassPath>,
) -> Result<Json<Class>, AppError> {
    let (tenant_id, class_id) = path.ids()?;
    Ok(Json(state.classes.find_by_id(tenant_id, class_id).await?))
}

async fn delete_class(
    State(state): State<AppState>,
    PathParams(path): PathParams<ClassPath>,
) -> Result<StatusCode, AppError> {
    let (tenant_id, class_id) = path.ids()?;
    state.classes.delete(tenant_id, class_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_classes(
    State(state): State<AppState>,
    PathParams(path): PathParams<TenantPath>,
) -> Result<Json<ListResponse<Class>>, AppError> {
    let tenant_id = path.tenant_id()?;
    let classes = state.classes.list(tenant_id).await?;
    Ok(Json(ListResponse::new(classes)))
}

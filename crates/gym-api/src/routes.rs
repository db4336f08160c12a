//! Router composition

use axum::{middleware::from_fn, routing::get, Router};
use tower::{Layer, ServiceBuilder};
use tower_http::{
    normalize_path::{NormalizePath, NormalizePathLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
};

use crate::error::AppError;
use crate::handlers::{health::health, tenants::TenantHandler};
use crate::middleware::{log_request, CompactRequestId};
use crate::state::AppState;

/// All routes plus request-id and logging layers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(TenantHandler::new().into_router())
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(CompactRequestId))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(from_fn(log_request)),
        )
        .with_state(state)
}

/// The served application. Trailing slashes are trimmed before the router
/// sees the path.
pub fn app(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}

async fn route_not_found() -> AppError {
    AppError::route_not_found()
}

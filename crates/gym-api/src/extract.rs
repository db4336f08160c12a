//! Request extractors with JSON error responses

use axum::extract::{FromRequest, FromRequestParts};
use gym_shared::{parse_entity_id, ClassId, EntityId, TenantId, UserId};
use serde::Deserialize;

use crate::error::AppError;

/// `axum::Json` whose rejection is the JSON error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Path` whose rejection is the JSON error envelope.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParams<T>(pub T);

fn parse_id(raw: &str) -> Result<EntityId, AppError> {
    parse_entity_id(raw).map_err(|e| AppError::invalid_id().with_cause(e))
}

// Path segments are captured as strings so a non-numeric id is reported by
// the envelope with the parse failure as its cause.

#[derive(Debug, Deserialize)]
pub struct TenantPath {
    tenant_id: String,
}

impl TenantPath {
    pub fn tenant_id(&self) -> Result<TenantId, AppError> {
        parse_id(&self.tenant_id)
    }
}

#[derive(Debug, Deserialize)]
pub struct UserPath {
    tenant_id: String,
    user_id: String,
}

impl UserPath {
    pub fn ids(&self) -> Result<(TenantId, UserId), AppError> {
        Ok((parse_id(&self.tenant_id)?, parse_id(&self.user_id)?))
    }
}

#[derive(Debug, Deserialize)]
pub struct ClassPath {
    tenant_id: String,
    class_id: String,
}

impl ClassPath {
    pub fn ids(&self) -> Result<(TenantId, ClassId), AppError> {
        Ok((parse_id(&self.tenant_id)?, parse_id(&self.class_id)?))
    }
}

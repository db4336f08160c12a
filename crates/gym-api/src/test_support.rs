//! Router test helpers built on mocked repositories

use std::sync::Arc;

use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderMap, Method, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use gym_core::repositories::{MockClassRepository, MockTenantRepository, MockUserRepository};
use gym_core::{Class, Role, User};
use gym_security::BcryptHasher;
use gym_shared::constants::MIN_BCRYPT_COST;
use serde_json::Value;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

use crate::routes::app;
use crate::state::AppState;

pub(crate) struct Mocks {
    pub tenants: MockTenantRepository,
    pub users: MockUserRepository,
    pub classes: MockClassRepository,
}

impl Mocks {
    pub fn new() -> Self {
        Self {
            tenants: MockTenantRepository::new(),
            users: MockUserRepository::new(),
            classes: MockClassRepository::new(),
        }
    }

    pub fn into_app(self) -> NormalizePath<Router> {
        app(AppState {
            tenants: Arc::new(self.tenants),
            users: Arc::new(self.users),
            classes: Arc::new(self.classes),
            hasher: Arc::new(BcryptHasher::new(MIN_BCRYPT_COST).unwrap()),
        })
    }
}

pub(crate) fn get(uri: &str) -> Request {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub(crate) fn delete(uri: &str) -> Request {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub(crate) fn json_request(method: Method, uri: &str, body: Value) -> Request {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Sends one request through the app; an empty body decodes as `Value::Null`.
pub(crate) async fn send(
    app: NormalizePath<Router>,
    request: Request,
) -> (StatusCode, HeaderMap, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, body)
}

pub(crate) fn sample_user(id: i32, tenant_id: i32, role: Role) -> User {
    let at = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
    User {
        id,
        tenant_id,
        first_name: "Johnny".to_string(),
        last_name: "Bravo".to_string(),
        email: "jbravo@email.com".to_string(),
        password: "$2b$04$storedhash".to_string(),
        role,
        created_at: at,
        updated_at: at,
    }
}

pub(crate) fn sample_class(id: i32, tenant_id: i32) -> Class {
    let starts_at = Utc.with_ymd_and_hms(2024, 6, 3, 18, 0, 0).unwrap();
    Class {
        id,
        tenant_id,
        trainer_id: Some(2),
        name: "Morning HIIT".to_string(),
        description: "High intensity intervals".to_string(),
        capacity: 20,
        starts_at,
        ends_at: starts_at + chrono::Duration::hours(1),
        created_at: starts_at,
        updated_at: starts_at,
    }
}

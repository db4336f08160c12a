// ============================================================================
// Gym API - Error Envelope
// File: crates/gym-api/src/error.rs
// Description: Classifies failures into a code, status and client-safe message
// ============================================================================

use std::error::Error as StdError;
use std::fmt;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gym_core::StoreError;
use gym_security::PasswordError;
use serde::Serialize;
use thiserror::Error;

pub const MSG_INTERNAL: &str = "an internal server error occurred, please try again later";
pub const MSG_NOT_FOUND: &str = "the resource with the specified id was not found";
pub const MSG_ROUTE_NOT_FOUND: &str = "the requested resource could not be found";
pub const MSG_INVALID_ID: &str = "invalid resource id";
pub const MSG_EMPTY_UPDATE: &str = "no fields to update";
pub const MSG_UNDECODABLE_BODY: &str = "request body could not be decoded";
pub const MSG_CONFLICT: &str = "resource already exists";
pub const MSG_INVALID_VALUE: &str = "request contains an invalid value";

/// Client-facing messages for the named database constraints.
const CONSTRAINT_MESSAGES: &[(&str, &str)] = &[
    ("tenants_subdomain_key", "subdomain already exists"),
    ("users_email_key", "email already exists"),
    ("tenants_status_check", "invalid value for status"),
    ("users_role_check", "invalid value for role"),
    ("classes_capacity_check", "capacity must be a positive number"),
    ("classes_schedule_check", "class must end after it starts"),
];

fn constraint_message(constraint: &str) -> Option<&'static str> {
    CONSTRAINT_MESSAGES
        .iter()
        .find(|(name, _)| *name == constraint)
        .map(|(_, message)| *message)
}

/// Stable, machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InternalServerError,
    Unauthorized,
    NotFound,
    MalformedRequest,
    PermissionDenied,
    Conflict,
    NotImplemented,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InternalServerError => "internal_server_error",
            ErrorCode::Unauthorized => "unauthorized",
            ErrorCode::NotFound => "not_found",
            ErrorCode::MalformedRequest => "malformed_request",
            ErrorCode::PermissionDenied => "permission_denied",
            ErrorCode::Conflict => "conflict",
            ErrorCode::NotImplemented => "not_implemented",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::MalformedRequest => StatusCode::BAD_REQUEST,
            ErrorCode::PermissionDenied => StatusCode::FORBIDDEN,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::NotImplemented => StatusCode::NOT_IMPLEMENTED,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified request failure. `cause` is only ever logged.
#[derive(Error, Debug)]
#[error("{code}: {message}")]
pub struct AppError {
    code: ErrorCode,
    message: String,
    #[source]
    cause: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn internal(cause: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::new(ErrorCode::InternalServerError, MSG_INTERNAL).with_cause(cause)
    }

    pub fn invalid_id() -> Self {
        Self::new(ErrorCode::MalformedRequest, MSG_INVALID_ID)
    }

    pub fn route_not_found() -> Self {
        Self::new(ErrorCode::NotFound, MSG_ROUTE_NOT_FOUND)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let (code, message) = match &err {
            e if e.is_not_found() => (ErrorCode::NotFound, MSG_NOT_FOUND),
            StoreError::UniqueViolation { constraint } => (
                ErrorCode::Conflict,
                constraint_message(constraint).unwrap_or(MSG_CONFLICT),
            ),
            StoreError::CheckViolation { constraint } => (
                ErrorCode::MalformedRequest,
                constraint_message(constraint).unwrap_or(MSG_INVALID_VALUE),
            ),
            StoreError::EmptyUpdate => (ErrorCode::MalformedRequest, MSG_EMPTY_UPDATE),
            _ => (ErrorCode::InternalServerError, MSG_INTERNAL),
        };
        Self::new(code, message).with_cause(err)
    }
}

impl From<PasswordError> for AppError {
    fn from(err: PasswordError) -> Self {
        Self::internal(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(ErrorCode::MalformedRequest, MSG_UNDECODABLE_BODY)
            .with_cause(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::invalid_id().with_cause(rejection.body_text())
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: ErrorCode,
    message: &'a str,
}

/// Attached to error responses so the request logger can report the cause
/// without it reaching the body.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
    pub cause: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            code: self.code,
            message: &self.message,
        });
        let mut response = (self.code.status(), body).into_response();

        response.extensions_mut().insert(ErrorReport {
            code: self.code,
            cause: self.cause.as_ref().map(|cause| cause.to_string()),
            message: self.message,
        });
        response
    }
}

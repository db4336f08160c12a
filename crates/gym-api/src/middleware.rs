// ============================================================================
// Gym API - Middleware
// File: crates/gym-api/src/middleware.rs
// Description: Request ids and per-request logging
// ============================================================================

use std::time::Instant;

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use gym_shared::constants::REQUEST_ID_HEADER;
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use crate::error::ErrorReport;

/// Generates request ids as base64 of a v4 UUID with `+`, `/` and `=`
/// removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactRequestId;

impl CompactRequestId {
    pub fn generate() -> String {
        STANDARD
            .encode(Uuid::new_v4().as_bytes())
            .replace(['+', '/', '='], "")
    }
}

impl MakeRequestId for CompactRequestId {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Self::generate())
            .ok()
            .map(RequestId::new)
    }
}

/// Wraps the request in a `request` span, logs its completion, and emits the
/// error line for failed requests from the attached [`ErrorReport`].
pub async fn log_request(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
        .to_owned();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let span = info_span!("request", request_id = %request_id, %method, %path);

    async move {
        let started = Instant::now();
        let mut response = next.run(request).await;
        let status = response.status().as_u16();
        let duration_ms = started.elapsed().as_millis() as u64;

        if let Some(report) = response.extensions_mut().remove::<ErrorReport>() {
            error!(
                request_id = %request_id,
                code = %report.code,
                message = %report.message,
                cause = report.cause.as_deref().unwrap_or("-"),
                status,
                "Request failed"
            );
        }

        info!(status, duration_ms, "Request completed");
        response
    }
    .instrument(span)
    .await
}

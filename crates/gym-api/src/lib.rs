//! # Gym API
//!
//! HTTP handlers, extractors, middleware, and the error envelope.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{AppError, ErrorCode};
pub use routes::{app, build_router};
pub use state::AppState;

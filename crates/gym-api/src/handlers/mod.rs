//! HTTP handlers

pub mod classes;
pub mod health;
pub mod tenants;
pub mod users;

use std::sync::Arc;

use gym_security::PasswordHasher;

use crate::error::AppError;

/// Hashes on the blocking pool; bcrypt and argon2 are CPU-bound.
pub(crate) async fn hash_password(
    hasher: Arc<dyn PasswordHasher>,
    password: String,
) -> Result<String, AppError> {
    let hashed = tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(AppError::internal)??;
    Ok(hashed)
}

/// `Location` for a resource created under `collection_path`.
pub(crate) fn location(collection_path: &str, id: i32) -> String {
    format!("{}/{}", collection_path.trim_end_matches('/'), id)
}

//! Storage errors

use std::error::Error as StdError;

use thiserror::Error;

/// Failure reported by a repository. Carries just enough structure for the
/// API layer to classify it; the driver error is kept as the source
/// of [`StoreError::Database`].
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Row not found")]
    NotFound,

    #[error("Referenced row not found: {constraint}")]
    MissingReference { constraint: String },

    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    #[error("Check constraint violated: {constraint}")]
    CheckViolation { constraint: String },

    #[error("No fields to update")]
    EmptyUpdate,

    #[error("Database error: {0}")]
    Database(#[source] Box<dyn StdError + Send + Sync>),
}

impl StoreError {
    pub fn database(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        StoreError::Database(err.into())
    }

    /// True for a missing row and for a missing parent row.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound | StoreError::MissingReference { .. })
    }

    pub fn constraint(&self) -> Option<&str> {
        match self {
            StoreError::MissingReference { constraint }
            | StoreError::UniqueViolation { constraint }
            | StoreError::CheckViolation { constraint } => Some(constraint),
            _ => None,
        }
    }
}

//! Common types

use std::num::ParseIntError;

use thiserror::Error;

/// Primary keys are Postgres `SERIAL` columns.
pub type EntityId = i32;

pub type TenantId = EntityId;
pub type UserId = EntityId;
pub type ClassId = EntityId;

/// A path segment that is not an entity id.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidEntityId {
    #[error("invalid entity id {raw:?}: {source}")]
    NotAnInteger {
        raw: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid entity id {raw:?}: explicit sign is not allowed")]
    ExplicitSign { raw: String },
}

/// Parses a raw path segment into an entity id.
///
/// Only plain base-10 integers are accepted. Whitespace and a leading `+`
/// are rejected.
pub fn parse_entity_id(raw: &str) -> Result<EntityId, InvalidEntityId> {
    if raw.starts_with('+') {
        return Err(InvalidEntityId::ExplicitSign {
            raw: raw.to_string(),
        });
    }
    raw.parse().map_err(|source| InvalidEntityId::NotAnInteger {
        raw: raw.to_string(),
        source,
    })
}

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use validator::{Validate, ValidationError};

mod event;
mod group;
mod session;
mod ticket;

pub use event::*;
pub use group::*;
pub use session::*;
pub use ticket::*;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Payload does not match the expected shape: {0}")]
    Shape(String),

    #[error("Payload failed validation: {0}")]
    Invalid(String),

    #[error("Value is not a valid RFC 3339 instant: {0}")]
    Instant(String),
}

/// Runs a payload through the schema gate for a single entity.
///
/// The payload either comes out as a fully typed value or is rejected as a
/// whole. Optional fields are left untouched here, so a missing `canJoinAt`
/// stays missing until the lifecycle engine decides what it means.
pub fn decode<T>(payload: Value) -> Result<T, SchemaError>
where
    T: DeserializeOwned + Validate,
{
    let parsed: T = serde_json::from_value(payload).map_err(|e| SchemaError::Shape(e.to_string()))?;

    parsed
        .validate()
        .map_err(|e| SchemaError::Invalid(e.to_string()))?;

    Ok(parsed)
}

/// Like [`decode`], for collection endpoints. One invalid element rejects
/// the whole collection. Element order is preserved.
pub fn decode_many<T>(payload: Value) -> Result<Vec<T>, SchemaError>
where
    T: DeserializeOwned + Validate,
{
    let parsed: Vec<T> =
        serde_json::from_value(payload).map_err(|e| SchemaError::Shape(e.to_string()))?;

    for item in &parsed {
        item.validate()
            .map_err(|e| SchemaError::Invalid(e.to_string()))?;
    }

    Ok(parsed)
}

/// Converts a boundary timestamp into an instant at the point of
/// computation. Entities keep the string form as the authoritative value.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, SchemaError> {
    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|_| SchemaError::Instant(value.to_string()))
}

/// Validator for timestamp fields, so unparseable instants are rejected at
/// the schema gate instead of surfacing later inside a computation.
pub(crate) fn instant(value: &str) -> Result<(), ValidationError> {
    DateTime::parse_from_rfc3339(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("instant"))
}

/// A position inside a venue module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct VenueCoordinates {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

use thiserror::Error;

use crate::greenhouse::GreenhouseId;
use crate::sensor::SensorId;
use crate::user::UserId;

/// Domain-level errors
///
/// Every failure in this crate is a validation failure surfaced at the point
/// of construction or mutation; the variants name the offending field or
/// reference so the caller can correct its input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A required string field was empty or whitespace-only.
    #[error("Required field '{0}' cannot be empty")]
    EmptyField(&'static str),

    /// A bounded string field exceeded its maximum length.
    #[error("Field '{field}' too long: {len} chars (max {max})")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("Greenhouse not found: {0}")]
    GreenhouseNotFound(GreenhouseId),

    #[error("Sensor not found: {0}")]
    SensorNotFound(SensorId),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// Another user already holds this username.
    #[error("Username already taken: {0}")]
    DuplicateUsername(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;

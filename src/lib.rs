//! Domain core for the smart-greenhouse backend
//!
//! This crate contains:
//! - Entities (Greenhouse, Sensor, Measurement, User)
//! - Value objects (typed ids)
//! - The in-memory store that keeps parent/child collections consistent
//!
//! Principles:
//! - No dependencies on persistence or web layers
//! - Required fields validated at construction and update time
//! - A child and its owning collection always agree on who owns whom
//! - Testable in isolation

pub mod error;
pub mod greenhouse;
pub mod measurement;
pub mod sensor;
pub mod store;
pub mod user;

// Re-export commonly used types
pub use error::DomainError;
pub use greenhouse::{Greenhouse, GreenhouseId};
pub use measurement::{Measurement, MeasurementId};
pub use sensor::{Sensor, SensorId};
pub use store::MemoryStore;
pub use user::{User, UserId};

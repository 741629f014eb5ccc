use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{DomainError, Result};
use crate::greenhouse::{Greenhouse, GreenhouseId};
use crate::measurement::{Measurement, MeasurementId};
use crate::sensor::{Sensor, SensorId};
use crate::user::{User, UserId, validate_username};

/// In-memory arena owning every entity of the domain.
///
/// Entities live in id-keyed maps. A parent keeps an ordered list of child
/// ids (the owning collection) and a child keeps the parent's id as a weak
/// back-reference; the two sides always agree, and every operation that moves
/// a child updates both in the same call. Ids are allocated sequentially per
/// entity, starting at 1, and are never reused; entities have no
/// destruction, only detachment.
///
/// The store is single-threaded and synchronous. The embedding layers own
/// any synchronization, typically one store instance per request transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    greenhouses: BTreeMap<GreenhouseId, Greenhouse>,
    sensors: BTreeMap<SensorId, Sensor>,
    measurements: BTreeMap<MeasurementId, Measurement>,
    users: BTreeMap<UserId, User>,
    next_greenhouse: u32,
    next_sensor: u32,
    next_measurement: u32,
    next_user: u32,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    // --- Greenhouses ---

    /// Create a greenhouse and return its id.
    pub fn create_greenhouse(
        &mut self,
        name: impl Into<String>,
        location: Option<String>,
    ) -> Result<GreenhouseId> {
        let id = GreenhouseId::new(self.next_greenhouse + 1);
        let greenhouse = Greenhouse::new(id, name, location)?;

        self.next_greenhouse += 1;
        self.greenhouses.insert(id, greenhouse);
        info!(greenhouse_id = %id, "greenhouse created");
        Ok(id)
    }

    pub fn greenhouse(&self, id: GreenhouseId) -> Option<&Greenhouse> {
        self.greenhouses.get(&id)
    }

    /// Mutable access for local updates (`update_name`, `set_location`).
    /// Relationship state is only reachable through the store operations.
    pub fn greenhouse_mut(&mut self, id: GreenhouseId) -> Option<&mut Greenhouse> {
        self.greenhouses.get_mut(&id)
    }

    /// All greenhouses, in id order.
    pub fn greenhouses(&self) -> impl Iterator<Item = &Greenhouse> {
        self.greenhouses.values()
    }

    // --- Sensors ---

    /// Create a sensor linked to `greenhouse` and return its id.
    ///
    /// A sensor is never created detached: creation requires an owning
    /// greenhouse, and the new sensor appears at the end of its collection.
    pub fn create_sensor(
        &mut self,
        greenhouse: GreenhouseId,
        sensor_type: impl Into<String>,
        name: Option<String>,
    ) -> Result<SensorId> {
        let id = SensorId::new(self.next_sensor + 1);
        let sensor = Sensor::new(id, sensor_type, name)?;
        if !self.greenhouses.contains_key(&greenhouse) {
            return Err(DomainError::GreenhouseNotFound(greenhouse));
        }

        self.next_sensor += 1;
        self.sensors.insert(id, sensor);
        self.link_sensor(greenhouse, id);
        info!(sensor_id = %id, greenhouse_id = %greenhouse, "sensor created");
        Ok(id)
    }

    /// Attach a sensor to a greenhouse.
    ///
    /// A sensor already in this greenhouse's collection is left alone. A
    /// sensor owned by a different greenhouse is silently detached from it
    /// first, then appended to the new collection.
    pub fn attach_sensor(&mut self, greenhouse: GreenhouseId, sensor: SensorId) -> Result<()> {
        if !self.greenhouses.contains_key(&greenhouse) {
            return Err(DomainError::GreenhouseNotFound(greenhouse));
        }
        let current = self
            .sensors
            .get(&sensor)
            .ok_or(DomainError::SensorNotFound(sensor))?
            .greenhouse_id();

        if current == Some(greenhouse) {
            debug!(sensor_id = %sensor, greenhouse_id = %greenhouse, "sensor already attached");
            return Ok(());
        }

        if let Some(old) = current {
            if let Some(previous) = self.greenhouses.get_mut(&old) {
                previous.remove_sensor(sensor);
            }
        }
        self.link_sensor(greenhouse, sensor);

        match current {
            Some(old) => {
                info!(sensor_id = %sensor, from = %old, to = %greenhouse, "sensor re-parented");
            }
            None => info!(sensor_id = %sensor, greenhouse_id = %greenhouse, "sensor attached"),
        }
        Ok(())
    }

    /// Detach a sensor from a greenhouse and clear its back-reference.
    ///
    /// Absence is not an error: detaching a sensor that is not in this
    /// particular collection (including one owned by a different greenhouse)
    /// leaves everything as it was. The sensor itself keeps existing and can
    /// be re-attached later.
    pub fn detach_sensor(&mut self, greenhouse: GreenhouseId, sensor: SensorId) -> Result<()> {
        if !self.greenhouses.contains_key(&greenhouse) {
            return Err(DomainError::GreenhouseNotFound(greenhouse));
        }
        if !self.sensors.contains_key(&sensor) {
            return Err(DomainError::SensorNotFound(sensor));
        }

        let present = self
            .greenhouses
            .get(&greenhouse)
            .is_some_and(|g| g.contains_sensor(sensor));
        if !present {
            debug!(sensor_id = %sensor, greenhouse_id = %greenhouse, "sensor not in this greenhouse");
            return Ok(());
        }

        if let Some(owner) = self.greenhouses.get_mut(&greenhouse) {
            owner.remove_sensor(sensor);
        }
        if let Some(s) = self.sensors.get_mut(&sensor) {
            s.set_greenhouse(None);
        }
        info!(sensor_id = %sensor, greenhouse_id = %greenhouse, "sensor detached");
        Ok(())
    }

    pub fn sensor(&self, id: SensorId) -> Option<&Sensor> {
        self.sensors.get(&id)
    }

    /// Mutable access for local updates (`set_name`); the sensor type and
    /// the relationship fields are not reachable this way.
    pub fn sensor_mut(&mut self, id: SensorId) -> Option<&mut Sensor> {
        self.sensors.get_mut(&id)
    }

    /// All sensors, in id order, attached or not.
    pub fn sensors(&self) -> impl Iterator<Item = &Sensor> {
        self.sensors.values()
    }

    /// Sensors of one greenhouse, in insertion order. `None` for an unknown
    /// greenhouse id.
    pub fn sensors_in(&self, greenhouse: GreenhouseId) -> Option<Vec<&Sensor>> {
        let greenhouse = self.greenhouses.get(&greenhouse)?;
        Some(
            greenhouse
                .sensor_ids()
                .iter()
                .filter_map(|id| self.sensors.get(id))
                .collect(),
        )
    }

    // --- Measurements ---

    /// Record a measurement for `sensor` and return its id.
    ///
    /// The measurement is linked into the sensor's collection at creation and
    /// is immutable from then on; no operation moves or rewrites it.
    pub fn record_measurement(
        &mut self,
        sensor: SensorId,
        timestamp: DateTime<Utc>,
        value: Decimal,
    ) -> Result<MeasurementId> {
        if !self.sensors.contains_key(&sensor) {
            return Err(DomainError::SensorNotFound(sensor));
        }

        self.next_measurement += 1;
        let id = MeasurementId::new(self.next_measurement);
        self.measurements
            .insert(id, Measurement::new(id, sensor, timestamp, value));
        if let Some(s) = self.sensors.get_mut(&sensor) {
            s.push_measurement(id);
        }
        info!(measurement_id = %id, sensor_id = %sensor, "measurement recorded");
        Ok(id)
    }

    pub fn measurement(&self, id: MeasurementId) -> Option<&Measurement> {
        self.measurements.get(&id)
    }

    /// All measurements, in id order.
    pub fn measurements(&self) -> impl Iterator<Item = &Measurement> {
        self.measurements.values()
    }

    /// Measurements of one sensor, in recording order. `None` for an unknown
    /// sensor id.
    pub fn measurements_of(&self, sensor: SensorId) -> Option<Vec<&Measurement>> {
        let sensor = self.sensors.get(&sensor)?;
        Some(
            sensor
                .measurement_ids()
                .iter()
                .filter_map(|id| self.measurements.get(id))
                .collect(),
        )
    }

    // --- Users ---

    /// Create a user and return its id. Usernames are unique across the
    /// store.
    pub fn create_user(&mut self, username: impl Into<String>) -> Result<UserId> {
        let id = UserId::new(self.next_user + 1);
        let user = User::new(id, username)?;
        if self.user_by_username(user.username()).is_some() {
            return Err(DomainError::DuplicateUsername(user.username().to_string()));
        }

        self.next_user += 1;
        self.users.insert(id, user);
        info!(user_id = %id, "user created");
        Ok(id)
    }

    /// Rename a user, re-checking store-level uniqueness. Renaming a user to
    /// its current name is allowed.
    pub fn update_username(&mut self, user: UserId, username: impl Into<String>) -> Result<()> {
        let username = username.into();
        validate_username(&username)?;
        if !self.users.contains_key(&user) {
            return Err(DomainError::UserNotFound(user));
        }
        if let Some(existing) = self.user_by_username(&username) {
            if existing.id() != user {
                return Err(DomainError::DuplicateUsername(username));
            }
        }

        if let Some(u) = self.users.get_mut(&user) {
            u.set_username(username);
        }
        info!(user_id = %user, "username updated");
        Ok(())
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// All users, in id order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// Exact-match username lookup; this is also the uniqueness check.
    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.values().find(|u| u.username() == username)
    }

    /// Set both sides of the greenhouse↔sensor link. Callers have verified
    /// both ids and taken the sensor out of any previous collection.
    fn link_sensor(&mut self, greenhouse: GreenhouseId, sensor: SensorId) {
        if let Some(target) = self.greenhouses.get_mut(&greenhouse) {
            target.insert_sensor(sensor);
        }
        if let Some(s) = self.sensors.get_mut(&sensor) {
            s.set_greenhouse(Some(greenhouse));
        }
    }
}

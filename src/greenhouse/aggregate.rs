use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};
use crate::sensor::SensorId;

use super::GreenhouseId;

/// Greenhouse aggregate root.
///
/// Owns the ordered collection of its sensors as ids into the store's arena;
/// each owned sensor holds this greenhouse's id as its back-reference, and
/// the two sides always agree. Relationship changes go through
/// [`MemoryStore`](crate::store::MemoryStore) so both sides move together;
/// the public methods here only touch local state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Greenhouse {
    id: GreenhouseId,
    name: String,
    location: Option<String>,
    sensors: Vec<SensorId>,
}

impl Greenhouse {
    /// Create a greenhouse with a validated name.
    ///
    /// Called by the store, which allocates the id.
    pub(crate) fn new(
        id: GreenhouseId,
        name: impl Into<String>,
        location: Option<String>,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyField("name"));
        }
        Ok(Self {
            id,
            name,
            location,
            sensors: Vec::new(),
        })
    }

    pub fn id(&self) -> GreenhouseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Read-only view of the owned sensor ids, in insertion order.
    pub fn sensor_ids(&self) -> &[SensorId] {
        &self.sensors
    }

    pub fn sensor_count(&self) -> usize {
        self.sensors.len()
    }

    pub fn contains_sensor(&self, id: SensorId) -> bool {
        self.sensors.contains(&id)
    }

    /// Rename the greenhouse. The name stays required after creation.
    pub fn update_name(&mut self, new_name: impl Into<String>) -> Result<()> {
        let new_name = new_name.into();
        if new_name.trim().is_empty() {
            return Err(DomainError::EmptyField("name"));
        }
        self.name = new_name;
        Ok(())
    }

    /// Location is optional and freely mutable.
    pub fn set_location(&mut self, location: Option<String>) {
        self.location = location;
    }

    /// Append a sensor id to the owned collection; duplicate ids are ignored.
    /// Store-internal, the caller keeps the sensor's back-reference in step.
    pub(crate) fn insert_sensor(&mut self, id: SensorId) {
        if !self.sensors.contains(&id) {
            self.sensors.push(id);
        }
    }

    /// Remove a sensor id from the owned collection; no-op if absent.
    /// Store-internal, same contract as `insert_sensor`.
    pub(crate) fn remove_sensor(&mut self, id: SensorId) {
        self.sensors.retain(|s| *s != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_greenhouse() -> Greenhouse {
        Greenhouse::new(GreenhouseId::new(1), "North wing", None).unwrap()
    }

    #[test]
    fn test_new_greenhouse() {
        let greenhouse = Greenhouse::new(
            GreenhouseId::new(1),
            "North wing",
            Some("Building A".to_string()),
        )
        .unwrap();

        assert_eq!(greenhouse.id(), GreenhouseId::new(1));
        assert_eq!(greenhouse.name(), "North wing");
        assert_eq!(greenhouse.location(), Some("Building A"));
        assert_eq!(greenhouse.sensor_count(), 0);
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Greenhouse::new(GreenhouseId::new(1), "", None);
        assert_eq!(result.unwrap_err(), DomainError::EmptyField("name"));
    }

    #[test]
    fn test_whitespace_name_rejected() {
        let result = Greenhouse::new(GreenhouseId::new(1), "   \t", None);
        assert_eq!(result.unwrap_err(), DomainError::EmptyField("name"));
    }

    #[test]
    fn test_update_name() {
        let mut greenhouse = create_test_greenhouse();
        greenhouse.update_name("South wing").unwrap();
        assert_eq!(greenhouse.name(), "South wing");
    }

    #[test]
    fn test_update_name_keeps_old_value_on_failure() {
        let mut greenhouse = create_test_greenhouse();
        let result = greenhouse.update_name("  ");

        assert_eq!(result.unwrap_err(), DomainError::EmptyField("name"));
        assert_eq!(greenhouse.name(), "North wing");
    }

    #[test]
    fn test_set_location() {
        let mut greenhouse = create_test_greenhouse();
        assert_eq!(greenhouse.location(), None);

        greenhouse.set_location(Some("Roof".to_string()));
        assert_eq!(greenhouse.location(), Some("Roof"));

        greenhouse.set_location(None);
        assert_eq!(greenhouse.location(), None);
    }

    #[test]
    fn test_insert_sensor_ignores_duplicates() {
        let mut greenhouse = create_test_greenhouse();
        greenhouse.insert_sensor(SensorId::new(3));
        greenhouse.insert_sensor(SensorId::new(3));

        assert_eq!(greenhouse.sensor_ids(), &[SensorId::new(3)]);
    }

    #[test]
    fn test_remove_sensor_absent_is_noop() {
        let mut greenhouse = create_test_greenhouse();
        greenhouse.insert_sensor(SensorId::new(3));
        greenhouse.remove_sensor(SensorId::new(9));

        assert_eq!(greenhouse.sensor_count(), 1);
    }

    #[test]
    fn test_sensor_order_is_insertion_order() {
        let mut greenhouse = create_test_greenhouse();
        greenhouse.insert_sensor(SensorId::new(2));
        greenhouse.insert_sensor(SensorId::new(5));
        greenhouse.insert_sensor(SensorId::new(1));

        assert_eq!(
            greenhouse.sensor_ids(),
            &[SensorId::new(2), SensorId::new(5), SensorId::new(1)]
        );
    }
}

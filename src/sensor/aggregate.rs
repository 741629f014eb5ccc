use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};
use crate::greenhouse::GreenhouseId;
use crate::measurement::MeasurementId;

use super::SensorId;

/// A sensor mounted in a greenhouse.
///
/// Belongs to at most one greenhouse at a time (exactly one at creation) and
/// owns the ordered collection of its measurements. The back-reference is a
/// weak id lookup, never an owning pointer, so the entity graph stays
/// cycle-free.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sensor {
    id: SensorId,
    sensor_type: String,
    name: Option<String>,
    greenhouse: Option<GreenhouseId>,
    measurements: Vec<MeasurementId>,
}

impl Sensor {
    /// Create a sensor with a validated type. Called by the store, which
    /// allocates the id and links the sensor into its greenhouse.
    pub(crate) fn new(
        id: SensorId,
        sensor_type: impl Into<String>,
        name: Option<String>,
    ) -> Result<Self> {
        let sensor_type = sensor_type.into();
        if sensor_type.trim().is_empty() {
            return Err(DomainError::EmptyField("sensor_type"));
        }
        Ok(Self {
            id,
            sensor_type,
            name,
            greenhouse: None,
            measurements: Vec::new(),
        })
    }

    pub fn id(&self) -> SensorId {
        self.id
    }

    /// What the sensor measures, e.g. "temperature". Immutable after
    /// construction.
    pub fn sensor_type(&self) -> &str {
        &self.sensor_type
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name is optional and freely mutable.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Id of the owning greenhouse; `None` while detached.
    pub fn greenhouse_id(&self) -> Option<GreenhouseId> {
        self.greenhouse
    }

    /// Read-only view of the owned measurement ids, in recording order.
    pub fn measurement_ids(&self) -> &[MeasurementId] {
        &self.measurements
    }

    pub fn measurement_count(&self) -> usize {
        self.measurements.len()
    }

    /// Store-internal: the caller keeps the greenhouse collection in step.
    pub(crate) fn set_greenhouse(&mut self, greenhouse: Option<GreenhouseId>) {
        self.greenhouse = greenhouse;
    }

    /// Append a measurement id; duplicate ids are ignored. Store-internal.
    pub(crate) fn push_measurement(&mut self, id: MeasurementId) {
        if !self.measurements.contains(&id) {
            self.measurements.push(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sensor() {
        let sensor = Sensor::new(SensorId::new(1), "temperature", None).unwrap();

        assert_eq!(sensor.id(), SensorId::new(1));
        assert_eq!(sensor.sensor_type(), "temperature");
        assert_eq!(sensor.name(), None);
        assert_eq!(sensor.greenhouse_id(), None);
        assert_eq!(sensor.measurement_count(), 0);
    }

    #[test]
    fn test_empty_type_rejected() {
        let result = Sensor::new(SensorId::new(1), "", None);
        assert_eq!(result.unwrap_err(), DomainError::EmptyField("sensor_type"));
    }

    #[test]
    fn test_whitespace_type_rejected() {
        let result = Sensor::new(SensorId::new(1), " \n ", None);
        assert_eq!(result.unwrap_err(), DomainError::EmptyField("sensor_type"));
    }

    #[test]
    fn test_set_name() {
        let mut sensor =
            Sensor::new(SensorId::new(1), "humidity", Some("east bed".to_string())).unwrap();
        assert_eq!(sensor.name(), Some("east bed"));

        sensor.set_name(None);
        assert_eq!(sensor.name(), None);
    }

    #[test]
    fn test_push_measurement_keeps_order() {
        let mut sensor = Sensor::new(SensorId::new(1), "temperature", None).unwrap();
        sensor.push_measurement(MeasurementId::new(4));
        sensor.push_measurement(MeasurementId::new(2));
        sensor.push_measurement(MeasurementId::new(4));

        assert_eq!(
            sensor.measurement_ids(),
            &[MeasurementId::new(4), MeasurementId::new(2)]
        );
    }
}

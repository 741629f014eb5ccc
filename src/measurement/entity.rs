use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::sensor::SensorId;

use super::MeasurementId;

/// A single reading taken by a sensor.
///
/// Immutable after construction: the sensor reference is set once and there
/// is no operation anywhere in the crate that moves or rewrites a recorded
/// measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    id: MeasurementId,
    sensor: SensorId,
    timestamp: DateTime<Utc>,
    value: Decimal,
}

impl Measurement {
    pub(crate) fn new(
        id: MeasurementId,
        sensor: SensorId,
        timestamp: DateTime<Utc>,
        value: Decimal,
    ) -> Self {
        Self {
            id,
            sensor,
            timestamp,
            value,
        }
    }

    pub fn id(&self) -> MeasurementId {
        self.id
    }

    /// Id of the sensor that recorded this measurement.
    pub fn sensor_id(&self) -> SensorId {
        self.sensor
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Measured value; the persistence layer maps it to a DECIMAL(10, 2)
    /// column.
    pub fn value(&self) -> Decimal {
        self.value
    }
}

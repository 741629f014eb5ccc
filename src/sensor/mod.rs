mod aggregate;
mod sensor_id;

pub use aggregate::Sensor;
pub use sensor_id::SensorId;

mod entity;
mod measurement_id;

pub use entity::Measurement;
pub use measurement_id::MeasurementId;

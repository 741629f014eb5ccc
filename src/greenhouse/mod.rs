mod aggregate;
mod greenhouse_id;

pub use aggregate::Greenhouse;
pub use greenhouse_id::GreenhouseId;

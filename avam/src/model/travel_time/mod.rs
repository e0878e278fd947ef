mod aggregate;
mod estimate;
mod matrix;
mod mode;

pub use aggregate::{aggregate_to_municipalities, AggregationMethod};
pub use estimate::{estimate_public_transport, EstimateSite};
pub use matrix::{CityDurations, TravelTimeMatrix};
pub use mode::TravelMode;

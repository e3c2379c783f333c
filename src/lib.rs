pub mod app_config;
pub mod distance;
pub mod domain;
mod geo_point_deserializer;

pub use distance::{EARTH_RADIUS_METERS, distance, point_within_range};
pub use domain::{FieldOrder, GeoPoint};

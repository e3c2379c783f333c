mod coordinate;
mod field_order;
mod geo_point;
mod geo_point_parser;

pub use coordinate::{CoordinateError, CoordinateInput, is_valid_latitude, is_valid_longitude};
pub use field_order::FieldOrder;
pub use geo_point::GeoPoint;

use crate::domain::coordinate::{CoordinateError, CoordinateInput, is_valid_latitude, is_valid_longitude};
use std::fmt::{Display, Formatter};
use tracing::trace;

/// A latitude, longitude and altitude in decimal degrees and meters.
///
/// Latitude and longitude only ever hold values within their valid range. A rejected value leaves the previous one
/// in place, which is 0.0 until a valid value has been accepted. Altitude is not range checked.
#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
    altitude: f64, // In meters
}

impl GeoPoint {
    pub fn new(latitude: impl CoordinateInput, longitude: impl CoordinateInput, altitude: f64) -> Self {
        let mut point = GeoPoint::default();
        point.set_latitude(latitude);
        point.set_longitude(longitude);
        point.altitude = altitude;
        point
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    pub fn set_latitude(&mut self, value: impl CoordinateInput) {
        self.try_set_latitude(value)
            .unwrap_or_else(|e| trace!("Keeping latitude {}: {}", self.latitude, e));
    }

    pub fn set_longitude(&mut self, value: impl CoordinateInput) {
        self.try_set_longitude(value)
            .unwrap_or_else(|e| trace!("Keeping longitude {}: {}", self.longitude, e));
    }

    pub fn set_altitude(&mut self, value: impl CoordinateInput) {
        self.try_set_altitude(value)
            .unwrap_or_else(|e| trace!("Keeping altitude {}: {}", self.altitude, e));
    }

    pub(crate) fn try_set_latitude(&mut self, value: impl CoordinateInput) -> Result<(), CoordinateError> {
        let latitude = value.to_coordinate()?;
        if !is_valid_latitude(latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }

        self.latitude = latitude;
        Ok(())
    }

    pub(crate) fn try_set_longitude(&mut self, value: impl CoordinateInput) -> Result<(), CoordinateError> {
        let longitude = value.to_coordinate()?;
        if !is_valid_longitude(longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }

        self.longitude = longitude;
        Ok(())
    }

    pub(crate) fn try_set_altitude(&mut self, value: impl CoordinateInput) -> Result<(), CoordinateError> {
        self.altitude = value.to_coordinate()?;
        Ok(())
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "lat: {}, lon: {}, alt: {}", self.latitude, self.longitude, self.altitude)
    }
}

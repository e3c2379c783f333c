use thiserror::Error;

pub fn is_valid_latitude(value: f64) -> bool {
    (-90.0..=90.0).contains(&value)
}

pub fn is_valid_longitude(value: f64) -> bool {
    (-180.0..=180.0).contains(&value)
}

/// A value that can be offered to one of the [`GeoPoint`](crate::domain::GeoPoint) setters.
///
/// Numbers convert as is, text is parsed as a floating point number.
pub trait CoordinateInput {
    fn to_coordinate(&self) -> Result<f64, CoordinateError>;
}

macro_rules! impl_coordinate_input {
    ($($t:ty)*) => ($(
        impl CoordinateInput for $t {
            fn to_coordinate(&self) -> Result<f64, CoordinateError> {
                Ok(f64::from(*self))
            }
        }
    )*)
}

impl_coordinate_input! { f64 f32 i8 i16 i32 u8 u16 u32 }

impl CoordinateInput for str {
    fn to_coordinate(&self) -> Result<f64, CoordinateError> {
        self.parse::<f64>().map_err(|_| CoordinateError::NotANumber(self.to_string()))
    }
}

impl CoordinateInput for &str {
    fn to_coordinate(&self) -> Result<f64, CoordinateError> {
        (**self).to_coordinate()
    }
}

impl CoordinateInput for String {
    fn to_coordinate(&self) -> Result<f64, CoordinateError> {
        self.as_str().to_coordinate()
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum CoordinateError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("invalid latitude: {0}, must be between -90 and 90")]
    LatitudeOutOfRange(f64),
    #[error("invalid longitude: {0}, must be between -180 and 180")]
    LongitudeOutOfRange(f64),
}

use serde::Deserialize;

/// Order of the fields in unlabeled, comma separated coordinate text.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOrder {
    /// `latitude, longitude[, altitude]`
    #[default]
    LatFirst,
    /// `longitude, latitude[, altitude]`, the layout used by NOAA station feeds.
    LonFirst,
}

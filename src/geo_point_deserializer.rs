use crate::domain::{FieldOrder, GeoPoint};
use serde::de::{Error, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt::Formatter;

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(GeoPointVisitor)
    }
}

struct GeoPointVisitor;

impl<'de> Visitor<'de> for GeoPointVisitor {
    type Value = GeoPoint;

    fn expecting(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str("coordinate text or a table with latitude, longitude and altitude_m")
    }

    // Text goes through the tolerant parser.
    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(GeoPoint::parsed(value, FieldOrder::LatFirst))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut latitude: Option<f64> = None;
        let mut longitude: Option<f64> = None;
        let mut altitude: Option<f64> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "latitude" => latitude = Some(map.next_value()?),
                "longitude" => longitude = Some(map.next_value()?),
                "altitude_m" => altitude = Some(map.next_value()?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        let latitude = latitude.ok_or_else(|| A::Error::missing_field("latitude"))?;
        let longitude = longitude.ok_or_else(|| A::Error::missing_field("longitude"))?;

        let mut point = GeoPoint::default();
        point.try_set_latitude(latitude).map_err(A::Error::custom)?;
        point.try_set_longitude(longitude).map_err(A::Error::custom)?;
        point.try_set_altitude(altitude.unwrap_or_default()).map_err(A::Error::custom)?;
        Ok(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn deserializes_coordinates() {
        let value = json!({ "latitude": 51.8615899, "longitude": 4.3580323, "altitude_m": 2.0 });
        let result = serde_json::from_value::<GeoPoint>(value).unwrap();

        assert_eq!(result, GeoPoint::new(51.8615899, 4.3580323, 2.0));
    }

    #[test]
    fn altitude_is_optional() {
        let value = json!({ "latitude": 51.8615899, "longitude": 4.3580323 });
        let result = serde_json::from_value::<GeoPoint>(value).unwrap();

        assert_eq!(result.altitude(), 0.0);
    }

    #[rstest]
    #[case::latitude_too_small(-90.1, 0.0)]
    #[case::latitude_too_large(90.1, 0.0)]
    #[case::longitude_too_small(0.0, -180.1)]
    #[case::longitude_too_large(0.0, 180.1)]
    fn fails_for_invalid_coordinates(#[case] latitude: f64, #[case] longitude: f64) {
        let value = json!({ "latitude": latitude, "longitude": longitude });
        let result = serde_json::from_value::<GeoPoint>(value);

        assert!(result.is_err());
    }

    #[rstest]
    #[case("76.45, -110.123")]
    #[case("Lat: 76.45, LONGITUDE: -110.123")]
    fn deserializes_text(#[case] text: &str) {
        let result = serde_json::from_value::<GeoPoint>(json!(text)).unwrap();

        assert_eq!(result, GeoPoint::new(76.45, -110.123, 0.0));
    }

    #[test]
    fn text_is_parsed_tolerantly() {
        let result = serde_json::from_value::<GeoPoint>(json!("999, 12.5")).unwrap();

        assert_eq!(result, GeoPoint::new(0.0, 12.5, 0.0));
    }

    #[rstest]
    #[case::latitude(json!({ "longitude": 4.0 }), "latitude")]
    #[case::longitude(json!({ "latitude": 51.0 }), "longitude")]
    fn reports_the_missing_field(#[case] value: serde_json::Value, #[case] field: &str) {
        let error = serde_json::from_value::<GeoPoint>(value).unwrap_err();

        assert!(error.to_string().contains(&format!("missing field `{}`", field)), "unexpected error: {}", error);
    }

    #[test]
    fn reports_the_invalid_coordinate() {
        let error = serde_json::from_value::<GeoPoint>(json!({ "latitude": 91.0, "longitude": 4.0 })).unwrap_err();

        assert!(error.to_string().contains("invalid latitude: 91"), "unexpected error: {}", error);
    }

    #[test]
    fn ignores_unknown_fields() {
        let value = json!({ "latitude": 1.0, "longitude": 2.0, "name": "buoy" });

        assert_eq!(serde_json::from_value::<GeoPoint>(value).unwrap(), GeoPoint::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn fails_for_other_values() {
        assert!(serde_json::from_value::<GeoPoint>(json!(42)).is_err());
    }
}

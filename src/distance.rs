use crate::domain::GeoPoint;

/// Mean Earth radius used for every distance in this crate.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance in meters between two coordinates in degrees, using the haversine formula on a sphere.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();

    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

pub fn distance(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    haversine(p1.latitude(), p1.longitude(), p2.latitude(), p2.longitude())
}

/// Returns true if `p2` is at most `meters` away from `p1`.
pub fn point_within_range(p1: &GeoPoint, p2: &GeoPoint, meters: f64) -> bool {
    distance(p1, p2) <= meters
}

impl GeoPoint {
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        distance(self, other)
    }

    pub fn distance_to_coordinates(&self, latitude: f64, longitude: f64) -> f64 {
        haversine(self.latitude(), self.longitude(), latitude, longitude)
    }

    pub fn in_range(&self, latitude: f64, longitude: f64, meters: f64) -> bool {
        self.distance_to_coordinates(latitude, longitude) <= meters
    }
}

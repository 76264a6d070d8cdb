// Location model representing a geographic coordinate in degrees

use crate::models::Kilometers;

/// Mean Earth radius used by the haversine formula, in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Represents a point as latitude/longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    /// Creates a new location with the given coordinates in degrees
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle (haversine) distance to another location, in kilometers.
    ///
    /// Inputs are not validated; coordinates outside the valid
    /// latitude/longitude ranges yield mathematically defined but
    /// meaningless results.
    pub fn distance_to(&self, other: &Location) -> Kilometers {
        let dlat = (other.lat - self.lat).to_radians();
        let dlon = (other.lon - self.lon).to_radians();

        let a = (dlat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos() * other.lat.to_radians().cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

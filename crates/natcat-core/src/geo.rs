//! Great-circle distance on a spherical Earth.

use serde::{Deserialize, Serialize};

use crate::{RiskZone, SeismicEvent};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn distance_km(self, other: Self) -> f64 {
        distance_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

impl SeismicEvent {
    pub const fn epicenter(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

impl RiskZone {
    pub const fn center(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Haversine distance in kilometers between two points given in degrees.
///
/// Coincident points short-circuit to exactly `0.0`. The haversine term is
/// clamped to `[0, 1]` so rounding near antipodes cannot produce NaN.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    if lat1 == lat2 && lon1 == lon2 {
        return 0.0;
    }

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let half_delta_lat = (lat2 - lat1).to_radians() / 2.0;
    let half_delta_lon = (lon2 - lon1).to_radians() / 2.0;

    let sin_lat = half_delta_lat.sin();
    let sin_lon = half_delta_lon.sin();
    let a = sin_lat * sin_lat + lat1_rad.cos() * lat2_rad.cos() * sin_lon * sin_lon;
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEW_YORK: GeoPoint = GeoPoint::new(40.7128, -74.0060);
    const LONDON: GeoPoint = GeoPoint::new(51.5074, -0.1278);
    const TOKYO: GeoPoint = GeoPoint::new(35.6762, 139.6503);
    const LOS_ANGELES: GeoPoint = GeoPoint::new(34.0522, -118.2437);

    #[test]
    fn same_point_is_exactly_zero() {
        for point in [NEW_YORK, LONDON, TOKYO, GeoPoint::new(-90.0, 180.0)] {
            assert_eq!(point.distance_km(point), 0.0);
        }
        assert_eq!(distance_km(40.0, -74.0, 40.0, -74.0), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            (NEW_YORK, LONDON),
            (TOKYO, LOS_ANGELES),
            (GeoPoint::new(-33.9, 18.4), GeoPoint::new(64.1, -21.9)),
        ];
        for (a, b) in pairs {
            assert_eq!(a.distance_km(b), b.distance_km(a));
        }
    }

    #[test]
    fn new_york_to_london() {
        let distance = NEW_YORK.distance_km(LONDON);
        assert!(5560.0 < distance && distance < 5580.0, "got {distance}");
    }

    #[test]
    fn tokyo_to_los_angeles() {
        let distance = TOKYO.distance_km(LOS_ANGELES);
        assert!(8800.0 < distance && distance < 8850.0, "got {distance}");
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let distance = distance_km(0.0, 0.0, 0.0, 180.0);
        assert!(!distance.is_nan());
        assert!((distance - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }
}

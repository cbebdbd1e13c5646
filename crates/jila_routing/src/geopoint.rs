use geo::{Distance, Haversine};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
///
/// Routing services speak `[lng, lat]`, everything inside this workspace speaks
/// `lat, lng`. Conversions between the two only go through [`GeoPoint::from_lng_lat`]
/// and [`GeoPoint::to_lng_lat`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const ORIGIN: GeoPoint = GeoPoint { lat: 0.0, lng: 0.0 };

    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn from_lng_lat([lng, lat]: [f64; 2]) -> Self {
        Self { lat, lng }
    }

    pub fn to_lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    /// Great-circle distance in meters
    pub fn haversine_distance(&self, other: &GeoPoint) -> f64 {
        Haversine.distance(geo::Point::from(self), geo::Point::from(other))
    }
}

impl From<&GeoPoint> for geo::Point<f64> {
    fn from(point: &GeoPoint) -> Self {
        geo::Point::new(point.lng, point.lat)
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        geo::Point::new(point.lng, point.lat)
    }
}

impl From<geo::Point<f64>> for GeoPoint {
    fn from(point: geo::Point<f64>) -> Self {
        GeoPoint {
            lat: point.y(),
            lng: point.x(),
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lng_lat_conversion_swaps_axes() {
        let point = GeoPoint::from_lng_lat([28.28, -15.41]);
        assert_eq!(point.lat, -15.41);
        assert_eq!(point.lng, 28.28);
        assert_eq!(point.to_lng_lat(), [28.28, -15.41]);
    }

    #[test]
    fn test_geo_point_axes() {
        let point: geo::Point = GeoPoint::new(50.85, 4.35).into();
        assert_eq!(point.x(), 4.35);
        assert_eq!(point.y(), 50.85);

        let back = GeoPoint::from(point);
        assert_eq!(back, GeoPoint::new(50.85, 4.35));
    }

    #[test]
    fn test_haversine_distance() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);

        // One degree of longitude on the equator is about 111.2 km
        let distance = a.haversine_distance(&b);
        assert!((distance - 111_195.0).abs() < 100.0, "{distance}");
        assert_eq!(a.haversine_distance(&a), 0.0);
    }
}

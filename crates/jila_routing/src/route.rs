use serde::{Deserialize, Serialize};

use crate::{error::RouteError, geopoint::GeoPoint, interpolate::point_at_progress};

/// A driving route as reported by the routing service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RouteRecord")]
pub struct Route {
    /// Ordered from origin to destination
    waypoints: Vec<GeoPoint>,

    /// Length reported by the routing service, in meters
    distance_metres: f64,
}

impl Route {
    /// Returns `None` when there are no waypoints.
    pub fn new(waypoints: Vec<GeoPoint>, distance_metres: f64) -> Option<Self> {
        if waypoints.is_empty() {
            return None;
        }

        Some(Self {
            waypoints,
            distance_metres: distance_metres.max(0.0),
        })
    }

    pub fn waypoints(&self) -> &[GeoPoint] {
        &self.waypoints
    }

    pub fn distance_metres(&self) -> f64 {
        self.distance_metres
    }

    pub fn origin(&self) -> GeoPoint {
        self.waypoints.first().copied().unwrap_or(GeoPoint::ORIGIN)
    }

    pub fn destination(&self) -> GeoPoint {
        self.waypoints.last().copied().unwrap_or(GeoPoint::ORIGIN)
    }

    pub fn point_at_progress(&self, progress: f64) -> GeoPoint {
        point_at_progress(&self.waypoints, progress)
    }

    /// Haversine length of the polyline, recomputed locally.
    pub fn geometry_length(&self) -> f64 {
        self.waypoints
            .windows(2)
            .map(|pair| pair[0].haversine_distance(&pair[1]))
            .sum()
    }
}

/// Unchecked wire shape, only turned into a [`Route`] through [`Route::new`].
#[derive(Deserialize)]
struct RouteRecord {
    waypoints: Vec<GeoPoint>,
    distance_metres: f64,
}

impl TryFrom<RouteRecord> for Route {
    type Error = RouteError;

    fn try_from(record: RouteRecord) -> Result<Self, Self::Error> {
        Route::new(record.waypoints, record.distance_metres).ok_or(RouteError::EmptyRoute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_waypoints() {
        assert!(Route::new(vec![], 10.0).is_none());
    }

    #[test]
    fn test_clamps_negative_distance() {
        let route = Route::new(vec![GeoPoint::new(1.0, 2.0)], -4.0).unwrap();
        assert_eq!(route.distance_metres(), 0.0);
    }

    #[test]
    fn test_deserialize_rejects_empty_waypoints() {
        let result: Result<Route, _> =
            serde_json::from_str(r#"{ "waypoints": [], "distance_metres": -5.0 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_clamps_negative_distance() {
        let route: Route = serde_json::from_str(
            r#"{ "waypoints": [{ "lat": 1.0, "lng": 2.0 }], "distance_metres": -5.0 }"#,
        )
        .unwrap();

        assert_eq!(route.distance_metres(), 0.0);
        assert_eq!(route.origin(), GeoPoint::new(1.0, 2.0));
        assert_eq!(route.destination(), GeoPoint::new(1.0, 2.0));
    }

    #[test]
    fn test_endpoints() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        let c = GeoPoint::new(1.0, 1.0);
        let route = Route::new(vec![a, b, c], 250_000.0).unwrap();

        assert_eq!(route.origin(), a);
        assert_eq!(route.destination(), c);
        assert_eq!(route.point_at_progress(0.0), a);
        assert_eq!(route.point_at_progress(1.0), c);
        assert_eq!(route.distance_metres(), 250_000.0);
        assert_eq!(
            route.geometry_length(),
            a.haversine_distance(&b) + b.haversine_distance(&c)
        );
    }
}

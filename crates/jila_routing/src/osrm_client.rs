use serde::Deserialize;
use tracing::{debug, warn};

use crate::{error::RouteError, geopoint::GeoPoint, route::Route};

pub const OSRM_ROUTE_API_PATH: &str = "/route/v1/driving/";
pub const OSRM_PUBLIC_URL: &str = "https://router.project-osrm.org";

const OSRM_OK_CODE: &str = "Ok";

#[derive(Deserialize)]
struct OsrmRouteResponse {
    code: String,

    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    /// Route length in meters
    distance: f64,

    geometry: OsrmGeometry,
}

/// GeoJSON LineString, coordinates are `[lng, lat]`
#[derive(Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

pub struct OsrmRouteClientParams {
    pub osrm_url: String,
}

impl Default for OsrmRouteClientParams {
    fn default() -> Self {
        Self {
            osrm_url: String::from(OSRM_PUBLIC_URL),
        }
    }
}

pub struct OsrmRouteClient {
    params: OsrmRouteClientParams,
    client: reqwest::Client,
}

impl OsrmRouteClient {
    pub fn new(params: OsrmRouteClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    /// Fetches the default driving route between two points.
    ///
    /// Every failure collapses to `None`, callers decide whether to retry.
    pub async fn fetch_route(&self, from: GeoPoint, to: GeoPoint) -> Option<Route> {
        match self.try_fetch_route(from, to).await {
            Ok(route) => Some(route),
            Err(err) => {
                warn!("OSRM routing failed: {}", err);
                None
            }
        }
    }

    pub async fn try_fetch_route(&self, from: GeoPoint, to: GeoPoint) -> Result<Route, RouteError> {
        let url = self.route_url(&from, &to);
        debug!("OSRM: requesting route {}", url);

        let response = self
            .client
            .get(url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RouteError::BadStatus {
                status: Some(response.status().as_u16()),
                code: None,
            });
        }

        let bytes = response.bytes().await?;
        let route = decode_route_response(bytes.as_ref())?;

        debug!(
            "OSRM: route with {} waypoints, {} m",
            route.waypoints().len(),
            route.distance_metres()
        );

        Ok(route)
    }

    fn route_url(&self, from: &GeoPoint, to: &GeoPoint) -> String {
        let [from_lng, from_lat] = from.to_lng_lat();
        let [to_lng, to_lat] = to.to_lng_lat();

        let mut url = self.params.osrm_url.trim_end_matches('/').to_owned();
        url.push_str(OSRM_ROUTE_API_PATH);
        url.push_str(&format!("{},{};{},{}", from_lng, from_lat, to_lng, to_lat));
        url
    }
}

pub(crate) fn decode_route_response(bytes: &[u8]) -> Result<Route, RouteError> {
    let response: OsrmRouteResponse = serde_json::from_slice(bytes)?;

    if response.code != OSRM_OK_CODE {
        return Err(RouteError::BadStatus {
            status: None,
            code: Some(response.code),
        });
    }

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or(RouteError::EmptyRoute)?;

    let waypoints = route
        .geometry
        .coordinates
        .into_iter()
        .map(GeoPoint::from_lng_lat)
        .collect();

    Route::new(waypoints, route.distance).ok_or(RouteError::EmptyRoute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_swaps_coordinates() {
        let body = br#"{
            "code": "Ok",
            "routes": [{
                "distance": 1234.5,
                "geometry": { "type": "LineString", "coordinates": [[28.28, -15.41], [28.30, -15.40]] }
            }]
        }"#;

        let route = decode_route_response(body).unwrap();

        assert_eq!(route.distance_metres(), 1234.5);
        assert_eq!(
            route.waypoints(),
            &[GeoPoint::new(-15.41, 28.28), GeoPoint::new(-15.40, 28.30)]
        );
    }

    #[test]
    fn test_decode_rejects_non_ok_code() {
        let body = br#"{ "code": "NoRoute", "message": "Impossible route" }"#;
        let err = decode_route_response(body).unwrap_err();

        assert!(matches!(
            err,
            RouteError::BadStatus { status: None, code: Some(ref code) } if code == "NoRoute"
        ));
    }

    #[test]
    fn test_decode_rejects_empty_routes() {
        let body = br#"{ "code": "Ok", "routes": [] }"#;
        assert!(matches!(
            decode_route_response(body),
            Err(RouteError::EmptyRoute)
        ));
    }

    #[test]
    fn test_decode_rejects_empty_geometry() {
        let body = br#"{ "code": "Ok", "routes": [{ "distance": 0, "geometry": { "coordinates": [] } }] }"#;
        assert!(matches!(
            decode_route_response(body),
            Err(RouteError::EmptyRoute)
        ));
    }

    #[test]
    fn test_decode_rejects_malformed_payload() {
        assert!(matches!(
            decode_route_response(b"<html>"),
            Err(RouteError::Decode(_))
        ));
    }

    #[test]
    fn test_route_url_uses_lng_lat_order() {
        let client = OsrmRouteClient::new(OsrmRouteClientParams {
            osrm_url: String::from("http://localhost:5000/"),
        });

        let url = client.route_url(&GeoPoint::new(-15.41, 28.28), &GeoPoint::new(-15.4, 28.3));
        assert_eq!(
            url,
            "http://localhost:5000/route/v1/driving/28.28,-15.41;28.3,-15.4"
        );
    }
}

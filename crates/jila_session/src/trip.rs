use jila_api::models::trip::TRIP_STATUS_COMPLETED;
use jila_routing::{GeoPoint, Route};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::progress::{ProgressState, apply_update};

/// A status update pushed by the trip feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripUpdate {
    pub id: i64,

    /// Remaining distance in meters
    pub distance: f64,
    pub trip_status: String,
    pub fare_total: f64,
}

/// State of the single active trip: latest update, progress and the route
/// the vehicle marker travels along.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripSession {
    active_trip: Option<TripUpdate>,
    progress: Option<ProgressState>,
    route: Option<Route>,
    last_update_time: Option<Timestamp>,
}

impl TripSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_trip_update(&mut self, update: TripUpdate) {
        self.progress = Some(apply_update(self.progress, update.distance));
        self.active_trip = Some(update);
        self.last_update_time = Some(Timestamp::now());
    }

    pub fn set_route(&mut self, route: Route) {
        self.route = Some(route);
    }

    pub fn clear(&mut self) {
        self.active_trip = None;
        self.progress = None;
        self.route = None;
        self.last_update_time = None;
    }

    pub fn active_trip(&self) -> Option<&TripUpdate> {
        self.active_trip.as_ref()
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn progress(&self) -> Option<&ProgressState> {
        self.progress.as_ref()
    }

    pub fn is_trip_active(&self) -> bool {
        self.active_trip.is_some()
    }

    pub fn is_completed(&self) -> bool {
        self.active_trip
            .as_ref()
            .is_some_and(|trip| trip.trip_status == TRIP_STATUS_COMPLETED)
    }

    pub fn distance_remaining(&self) -> Option<f64> {
        self.active_trip.as_ref().map(|trip| trip.distance)
    }

    /// 0 until the first update arrives.
    pub fn progress_ratio(&self) -> f64 {
        self.progress.map_or(0.0, |progress| progress.ratio())
    }

    pub fn last_update_time(&self) -> Option<Timestamp> {
        self.last_update_time
    }

    /// Where the vehicle marker sits on the route for the current progress.
    pub fn marker_position(&self) -> Option<GeoPoint> {
        self.route
            .as_ref()
            .map(|route| route.point_at_progress(self.progress_ratio()))
    }

    pub fn is_empty(&self) -> bool {
        self.active_trip.is_none() && self.route.is_none()
    }
}

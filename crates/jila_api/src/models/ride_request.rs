use jiff::{Timestamp, civil::DateTime, tz::TimeZone};
use serde::{Deserialize, Serialize};

use crate::models::{rider::Rider, trip::Trip};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideRequest {
    pub id: i64,
    pub pickup_location: String,
    pub drop_off_location: String,

    #[serde(default)]
    pub rider: Option<Rider>,

    #[serde(default)]
    pub trip: Option<Trip>,

    #[serde(default)]
    pub request_status: Option<String>,

    #[serde(default)]
    pub ride_request_status: Option<String>,
    pub requested_at: String,
}

impl RideRequest {
    /// `requestedAt` as a civil date time, accepts both zoned and local timestamps.
    pub fn requested_at(&self) -> Option<DateTime> {
        parse_requested_at(&self.requested_at)
    }

    pub fn status(&self) -> Option<&str> {
        self.ride_request_status
            .as_deref()
            .or(self.request_status.as_deref())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RideRequestRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub pickup_location: String,
    pub drop_off_location: String,
    pub rider_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ride_request_status: Option<String>,
}

fn parse_requested_at(value: &str) -> Option<DateTime> {
    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Some(timestamp.to_zoned(TimeZone::UTC).datetime());
    }

    value.parse::<DateTime>().ok()
}

/// Newest first, requests without a readable timestamp go last.
pub fn sort_by_requested_at_desc(requests: &mut [RideRequest]) {
    requests.sort_by_cached_key(|request| std::cmp::Reverse(request.requested_at()));
}

/// `"IN_PROGRESS"` / `"in_progress"` -> `"IN PROGRESS"`
pub fn format_ride_request_status(status: &str) -> String {
    status.to_uppercase().replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ride_request(id: i64, requested_at: &str) -> RideRequest {
        RideRequest {
            id,
            pickup_location: String::from("Cairo Road"),
            drop_off_location: String::from("Kenneth Kaunda International Airport"),
            rider: None,
            trip: None,
            request_status: None,
            ride_request_status: Some(String::from("PENDING")),
            requested_at: requested_at.to_owned(),
        }
    }

    #[test]
    fn test_format_ride_request_status() {
        assert_eq!(format_ride_request_status("in_progress"), "IN PROGRESS");
        assert_eq!(format_ride_request_status("DRIVER_ASSIGNED"), "DRIVER ASSIGNED");
        assert_eq!(format_ride_request_status("PENDING"), "PENDING");
        assert_eq!(format_ride_request_status(""), "");
    }

    #[test]
    fn test_parse_requested_at() {
        let local = ride_request(1, "2025-03-01T08:15:00");
        assert_eq!(
            local.requested_at(),
            Some(jiff::civil::date(2025, 3, 1).at(8, 15, 0, 0))
        );

        let zoned = ride_request(2, "2025-03-01T08:15:00Z");
        assert_eq!(
            zoned.requested_at(),
            Some(jiff::civil::date(2025, 3, 1).at(8, 15, 0, 0))
        );

        assert_eq!(ride_request(3, "yesterday").requested_at(), None);
    }

    #[test]
    fn test_sort_newest_first() {
        let mut requests = vec![
            ride_request(1, "2025-03-01T08:15:00"),
            ride_request(2, "not a date"),
            ride_request(3, "2025-03-02T09:00:00.123"),
            ride_request(4, "2025-02-28T23:59:59"),
        ];

        sort_by_requested_at_desc(&mut requests);

        let ids: Vec<i64> = requests.iter().map(|request| request.id).collect();
        assert_eq!(ids, vec![3, 1, 4, 2]);
    }

    #[test]
    fn test_status_prefers_ride_request_status() {
        let mut request = ride_request(1, "2025-03-01T08:15:00");
        request.request_status = Some(String::from("OPEN"));
        assert_eq!(request.status(), Some("PENDING"));

        request.ride_request_status = None;
        assert_eq!(request.status(), Some("OPEN"));
    }
}

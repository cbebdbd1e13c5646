use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::models::{driver::Driver, vehicle::Vehicle};

pub const TRIP_STATUS_COMPLETED: &str = "COMPLETED";

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: i64,

    #[serde(default)]
    pub driver: Option<Driver>,
    pub ride_request_id: i64,

    #[serde(default)]
    pub vehicle: Option<Vehicle>,
    pub trip_status: String,

    /// The backend sends decimals either as numbers or as strings
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub fare_total: f64,

    /// Meters
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub distance: f64,

    #[serde(default)]
    pub started_at: Option<String>,

    #[serde(default)]
    pub ended_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub distance: f64,
    pub fare_total: f64,
    pub trip_status: String,
    pub driver_id: i64,
    pub vehicle_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<i64>,
    pub ride_request_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_accepts_numeric_strings() {
        let trip: Trip = serde_json::from_str(
            r#"{
                "id": 3,
                "rideRequestId": 12,
                "tripStatus": "IN_PROGRESS",
                "fareTotal": "85.50",
                "distance": "12400",
                "startedAt": "2025-03-01T08:15:00"
            }"#,
        )
        .unwrap();

        assert_eq!(trip.fare_total, 85.5);
        assert_eq!(trip.distance, 12_400.0);
        assert!(trip.driver.is_none());
        assert!(trip.ended_at.is_none());
    }

    #[test]
    fn test_trip_accepts_numbers() {
        let trip: Trip = serde_json::from_str(
            r#"{ "id": 3, "rideRequestId": 12, "tripStatus": "COMPLETED", "fareTotal": 85.5, "distance": 0 }"#,
        )
        .unwrap();

        assert_eq!(trip.fare_total, 85.5);
        assert_eq!(trip.distance, 0.0);
        assert_eq!(trip.trip_status, TRIP_STATUS_COMPLETED);
    }

    #[test]
    fn test_trip_request_omits_missing_payment() {
        let request = TripRequest {
            distance: 12_400.0,
            fare_total: 85.5,
            trip_status: String::from("REQUESTED"),
            driver_id: 1,
            vehicle_id: 2,
            payment_id: None,
            ride_request_id: 12,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("paymentId").is_none());
        assert_eq!(value["rideRequestId"], 12);
        assert_eq!(value["fareTotal"], 85.5);
    }
}

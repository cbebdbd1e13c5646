use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
    error::ApiError,
    models::{
        driver::{Driver, DriverRequest},
        ride_request::{RideRequest, RideRequestRequest, sort_by_requested_at_desc},
        rider::{Rider, RiderRequest},
        trip::{Trip, TripRequest},
        vehicle::{Vehicle, VehicleRequest},
    },
};

pub struct JilaClientParams {
    /// Base URL of the backend, e.g. `http://localhost:8080/api`
    pub base_url: String,
}

/// Client for the ride-hailing backend.
pub struct JilaClient {
    params: JilaClientParams,
    client: reqwest::Client,
}

impl JilaClient {
    pub fn new(params: JilaClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub async fn create_trip(&self, trip: &TripRequest) -> Result<Trip, ApiError> {
        self.post("trips/", Some(trip)).await
    }

    pub async fn mark_trip_as_completed(&self, trip_id: i64) -> Result<bool, ApiError> {
        self.post::<(), _>(&format!("trips/{}", trip_id), None).await
    }

    pub async fn create_vehicle(&self, vehicle: &VehicleRequest) -> Result<Vehicle, ApiError> {
        self.post("vehicles/", Some(vehicle)).await
    }

    pub async fn create_rider(&self, rider: &RiderRequest) -> Result<Rider, ApiError> {
        self.post("riders/", Some(rider)).await
    }

    pub async fn get_rider_by_id(&self, rider_id: i64) -> Result<Rider, ApiError> {
        self.get(&format!("riders/{}", rider_id)).await
    }

    pub async fn create_driver(&self, driver: &DriverRequest) -> Result<Driver, ApiError> {
        self.post("drivers/", Some(driver)).await
    }

    pub async fn create_ride_request(
        &self,
        ride_request: &RideRequestRequest,
    ) -> Result<RideRequest, ApiError> {
        self.post("ride-requests/", Some(ride_request)).await
    }

    /// Cancels every open ride request of a rider.
    pub async fn cancel_ride_requests(&self, rider_id: i64) -> Result<bool, ApiError> {
        self.post::<(), _>(&format!("ride-requests/cancel/rider/{}", rider_id), None).await
    }

    pub async fn cancel_ride_request(&self, ride_request_id: i64) -> Result<bool, ApiError> {
        self.post::<(), _>(&format!("ride-requests/cancel/{}", ride_request_id), None).await
    }

    pub async fn get_all_ride_requests(&self) -> Result<Vec<RideRequest>, ApiError> {
        self.get("ride-requests/all").await
    }

    pub async fn get_ride_requests_by_status_and_rider(
        &self,
        rider_id: i64,
        status: &str,
    ) -> Result<Vec<RideRequest>, ApiError> {
        self.get(&format!("ride-requests/rider/{}/status/{}", rider_id, status)).await
    }

    /// Newest requests first.
    pub async fn get_ride_requests_by_rider(
        &self,
        rider_id: i64,
    ) -> Result<Vec<RideRequest>, ApiError> {
        let mut requests: Vec<RideRequest> =
            self.get(&format!("ride-requests/rider/{}", rider_id)).await?;
        sort_by_requested_at_desc(&mut requests);
        Ok(requests)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.params.base_url.trim_end_matches('/'), path)
    }

    async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("JilaApi: GET {}", url);

        let response = self.client.get(url).send().await.map_err(log_error)?;
        self.handle_response(response).await
    }

    async fn post<B, T>(&self, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("JilaApi: POST {}", url);

        let mut request = self.client.post(url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(log_error)?;
        self.handle_response(response).await
    }

    async fn handle_response<T>(&self, response: reqwest::Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let bytes = response.bytes().await.map_err(log_error)?;

        if !status.is_success() {
            let err = ApiError::from_body(&bytes);
            warn!("JilaApi: request failed with HTTP {}: {}", status, err);
            return Err(err);
        }

        serde_json::from_slice(&bytes).map_err(log_error)
    }
}

fn log_error<E>(err: E) -> ApiError
where
    E: std::error::Error,
    ApiError: From<E>,
{
    warn!("JilaApi: {}", err);
    ApiError::from(err)
}

use jila_api::models::{driver::Driver, ride_request::RideRequest, rider::Rider, vehicle::Vehicle};
use serde::{Deserialize, Serialize};

// An id of 0 is what the backend uses for "not registered yet".
const UNSET_ID: i64 = 0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiderSession {
    rider: Option<Rider>,
}

impl RiderSession {
    pub fn set_rider(&mut self, rider: Rider) {
        self.rider = Some(rider);
    }

    pub fn rider(&self) -> Option<&Rider> {
        self.rider.as_ref()
    }

    pub fn is_rider_available(&self) -> bool {
        self.rider.as_ref().is_some_and(|rider| rider.id != UNSET_ID)
    }

    pub fn is_empty(&self) -> bool {
        self.rider.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriverSession {
    driver: Option<Driver>,
}

impl DriverSession {
    pub fn set_driver(&mut self, driver: Driver) {
        self.driver = Some(driver);
    }

    pub fn driver(&self) -> Option<&Driver> {
        self.driver.as_ref()
    }

    pub fn is_driver_available(&self) -> bool {
        self.driver
            .as_ref()
            .is_some_and(|driver| driver.id != UNSET_ID)
    }

    pub fn is_empty(&self) -> bool {
        self.driver.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleSession {
    vehicle: Option<Vehicle>,
}

impl VehicleSession {
    pub fn set_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicle = Some(vehicle);
    }

    pub fn vehicle(&self) -> Option<&Vehicle> {
        self.vehicle.as_ref()
    }

    pub fn is_vehicle_available(&self) -> bool {
        self.vehicle
            .as_ref()
            .is_some_and(|vehicle| vehicle.id != UNSET_ID)
    }

    pub fn is_empty(&self) -> bool {
        self.vehicle.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RideRequestSession {
    ride_request: Option<RideRequest>,
}

impl RideRequestSession {
    pub fn set_ride_request(&mut self, ride_request: RideRequest) {
        self.ride_request = Some(ride_request);
    }

    pub fn clear_ride_request(&mut self) {
        self.ride_request = None;
    }

    pub fn ride_request(&self) -> Option<&RideRequest> {
        self.ride_request.as_ref()
    }

    pub fn is_ride_request_created(&self) -> bool {
        self.ride_request.is_some()
    }

    pub fn pickup_location(&self) -> Option<&str> {
        self.ride_request
            .as_ref()
            .map(|request| request.pickup_location.as_str())
    }

    pub fn drop_off_location(&self) -> Option<&str> {
        self.ride_request
            .as_ref()
            .map(|request| request.drop_off_location.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.ride_request.is_none()
    }
}

pub mod driver;
pub mod ride_request;
pub mod rider;
pub mod trip;
pub mod vehicle;

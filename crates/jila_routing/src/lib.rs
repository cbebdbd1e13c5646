pub mod error;
pub mod geopoint;
pub mod interpolate;
pub mod osrm_client;
pub mod route;

pub use error::RouteError;
pub use geopoint::GeoPoint;
pub use route::Route;

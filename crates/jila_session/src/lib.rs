pub mod profile;
pub mod progress;
pub mod store;
pub mod trip;

pub use store::{ClientSession, SessionStore, StoreError};
pub use trip::{TripSession, TripUpdate};

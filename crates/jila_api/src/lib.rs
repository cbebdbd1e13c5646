pub mod client;
pub mod error;
pub mod location_search;
pub mod models;

pub use client::{JilaClient, JilaClientParams};
pub use error::ApiError;

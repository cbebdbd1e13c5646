use serde::{Deserialize, Serialize};

use crate::models::driver::Driver;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub plate_number: String,
    pub chassis_number: String,
    pub engine_number: String,

    #[serde(default)]
    pub driver: Option<Driver>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRequest {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub plate_number: String,
    pub chassis_number: String,
    pub engine_number: String,
    pub driver_id: i64,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: i64,
    pub name: String,
    pub nrc: String,
    pub email: String,
    pub phone_number: String,
    pub license_number: String,
    pub driver_status: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverRequest {
    pub name: String,
    pub nrc: String,
    pub email: String,
    pub phone_number: String,
    pub license_number: String,
    pub driver_status: String,
}

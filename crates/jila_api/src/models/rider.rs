use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rider {
    pub id: i64,
    pub name: String,

    /// National registration card number
    pub nrc: String,
    pub email: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiderRequest {
    pub name: String,
    pub nrc: String,
    pub email: String,
    pub phone_number: String,
}

use jila_routing::GeoPoint;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use thiserror::Error;
use tracing::{debug, warn};

pub const NOMINATIM_PUBLIC_URL: &str = "https://nominatim.openstreetmap.org";
pub const NOMINATIM_SEARCH_PATH: &str = "/search";

const SEARCH_RESULT_LIMIT: &str = "5";
const USER_AGENT: &str = concat!("jila/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum LocationSearchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// A single Nominatim search result.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub place_id: u64,

    #[serde(default)]
    pub osm_type: Option<String>,

    #[serde(default)]
    pub osm_id: Option<u64>,

    // Nominatim sends coordinates as strings
    #[serde_as(as = "DisplayFromStr")]
    pub lat: f64,

    #[serde_as(as = "DisplayFromStr")]
    pub lon: f64,

    #[serde(default, rename = "type")]
    pub place_type: Option<String>,

    #[serde(default)]
    pub addresstype: Option<String>,

    #[serde(default)]
    pub name: Option<String>,
    pub display_name: String,

    #[serde(default)]
    pub address: Option<Address>,

    #[serde(default)]
    pub boundingbox: Vec<String>,
}

impl Place {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    pub suburb: Option<String>,
    pub city: Option<String>,
    pub state_district: Option<String>,
    pub state: Option<String>,

    #[serde(rename = "ISO3166-2-lvl4")]
    pub iso3166_2_lvl4: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
}

pub struct NominatimClientParams {
    pub nominatim_url: String,
}

impl Default for NominatimClientParams {
    fn default() -> Self {
        Self {
            nominatim_url: String::from(NOMINATIM_PUBLIC_URL),
        }
    }
}

pub struct NominatimClient {
    params: NominatimClientParams,
    client: reqwest::Client,
}

impl NominatimClient {
    pub fn new(params: NominatimClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    /// Free-text place search, failures are logged and give no results.
    pub async fn search(&self, query: &str) -> Vec<Place> {
        match self.try_search(query).await {
            Ok(places) => places,
            Err(err) => {
                warn!("Nominatim search for {:?} failed: {}", query, err);
                Vec::new()
            }
        }
    }

    pub async fn try_search(&self, query: &str) -> Result<Vec<Place>, LocationSearchError> {
        let mut url = self.params.nominatim_url.trim_end_matches('/').to_owned();
        url.push_str(NOMINATIM_SEARCH_PATH);

        let response = self
            .client
            .get(url)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("addressdetails", "1"),
                ("limit", SEARCH_RESULT_LIMIT),
            ])
            .header(reqwest::header::ACCEPT_LANGUAGE, "en")
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(LocationSearchError::Api { status, message });
        }

        let bytes = response.bytes().await?;
        let places: Vec<Place> = serde_json::from_slice(&bytes)?;

        debug!("Nominatim: {} results for {:?}", places.len(), query);

        Ok(places)
    }
}

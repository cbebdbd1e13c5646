use std::path::PathBuf;

use anyhow::Context;
use jila_api::{
    JilaClient, JilaClientParams,
    location_search::{NOMINATIM_PUBLIC_URL, NominatimClient, NominatimClientParams},
};
use jila_routing::osrm_client::{OSRM_PUBLIC_URL, OsrmRouteClient, OsrmRouteClientParams};
use jila_session::{SessionStore, store::STORAGE_FOLDER_ENV_VAR};
use tracing::debug;

const BACKEND_URL_ENV_VAR: &str = "JILA_BACKEND_URL";
const OSRM_URL_ENV_VAR: &str = "OSRM_URL";
const NOMINATIM_URL_ENV_VAR: &str = "NOMINATIM_URL";

pub struct JilaConfig {
    pub backend_url: Option<String>,
    pub osrm_url: String,
    pub nominatim_url: String,
    pub storage_folder: Option<PathBuf>,
}

impl JilaConfig {
    /// Reads `.env.local` if present, then the process environment.
    pub fn from_env() -> Self {
        dotenvy::from_filename("./.env.local").ok();

        let config = Self {
            backend_url: std::env::var(BACKEND_URL_ENV_VAR).ok(),
            osrm_url: std::env::var(OSRM_URL_ENV_VAR)
                .unwrap_or_else(|_| String::from(OSRM_PUBLIC_URL)),
            nominatim_url: std::env::var(NOMINATIM_URL_ENV_VAR)
                .unwrap_or_else(|_| String::from(NOMINATIM_PUBLIC_URL)),
            storage_folder: std::env::var(STORAGE_FOLDER_ENV_VAR).ok().map(PathBuf::from),
        };

        debug!(
            "Config: backend={:?} osrm={} nominatim={} storage={:?}",
            config.backend_url, config.osrm_url, config.nominatim_url, config.storage_folder
        );

        config
    }

    pub fn backend_client(&self) -> anyhow::Result<JilaClient> {
        let base_url = self
            .backend_url
            .clone()
            .with_context(|| format!("{} is not set", BACKEND_URL_ENV_VAR))?;

        Ok(JilaClient::new(JilaClientParams { base_url }))
    }

    pub fn route_client(&self) -> OsrmRouteClient {
        OsrmRouteClient::new(OsrmRouteClientParams {
            osrm_url: self.osrm_url.clone(),
        })
    }

    pub fn search_client(&self) -> NominatimClient {
        NominatimClient::new(NominatimClientParams {
            nominatim_url: self.nominatim_url.clone(),
        })
    }

    /// `None` when no storage folder is configured.
    pub fn session_store(&self) -> anyhow::Result<Option<SessionStore>> {
        self.storage_folder
            .as_ref()
            .map(|folder| SessionStore::new(folder).context("Invalid storage folder"))
            .transpose()
    }
}

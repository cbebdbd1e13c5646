use std::{
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::debug;

use crate::{
    profile::{DriverSession, RideRequestSession, RiderSession, VehicleSession},
    trip::TripSession,
};

pub const STORAGE_FOLDER_ENV_VAR: &str = "JILA_STORAGE_FOLDER";

pub const RIDER_KEY: &str = "rider";
pub const DRIVER_KEY: &str = "driver";
pub const VEHICLE_KEY: &str = "vehicle";
pub const RIDE_REQUEST_KEY: &str = "rideRequest";
pub const TRIP_KEY: &str = "trip";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("JILA_STORAGE_FOLDER is not set")]
    MissingFolder,

    #[error("Path {} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Key-value snapshot storage, one JSON file per key.
pub struct SessionStore {
    folder: PathBuf,
}

impl SessionStore {
    pub fn new(folder: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let folder = folder.into();

        if !folder.is_dir() {
            return Err(StoreError::NotADirectory(folder));
        }

        Ok(Self { folder })
    }

    pub fn from_env() -> Result<Self, StoreError> {
        let folder = std::env::var(STORAGE_FOLDER_ENV_VAR).map_err(|_| StoreError::MissingFolder)?;
        Self::new(folder)
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    fn path(&self, key: &str) -> PathBuf {
        self.folder.join(format!("{}.json", key))
    }

    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), StoreError>
    where
        T: Serialize,
    {
        let file = std::fs::File::create(self.path(key))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, value)?;
        writer.flush()?;

        debug!("Saved {} snapshot", key);
        Ok(())
    }

    pub fn load<T>(&self, key: &str) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let path = self.path(key);
        if !path.is_file() {
            return Ok(None);
        }

        let file = std::fs::File::open(path)?;
        let value = serde_json::from_reader(file)?;

        debug!("Restored {} snapshot", key);
        Ok(Some(value))
    }

    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Everything the client keeps between runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientSession {
    pub rider: RiderSession,
    pub driver: DriverSession,
    pub vehicle: VehicleSession,
    pub ride_request: RideRequestSession,
    pub trip: TripSession,
}

impl ClientSession {
    /// Loads every snapshot present in the store, missing ones stay empty.
    pub fn restore(store: &SessionStore) -> Result<Self, StoreError> {
        Ok(Self {
            rider: store.load(RIDER_KEY)?.unwrap_or_default(),
            driver: store.load(DRIVER_KEY)?.unwrap_or_default(),
            vehicle: store.load(VEHICLE_KEY)?.unwrap_or_default(),
            ride_request: store.load(RIDE_REQUEST_KEY)?.unwrap_or_default(),
            trip: store.load(TRIP_KEY)?.unwrap_or_default(),
        })
    }

    pub fn persist(&self, store: &SessionStore) -> Result<(), StoreError> {
        persist_entry(store, RIDER_KEY, &self.rider, self.rider.is_empty())?;
        persist_entry(store, DRIVER_KEY, &self.driver, self.driver.is_empty())?;
        persist_entry(store, VEHICLE_KEY, &self.vehicle, self.vehicle.is_empty())?;
        persist_entry(
            store,
            RIDE_REQUEST_KEY,
            &self.ride_request,
            self.ride_request.is_empty(),
        )?;
        persist_entry(store, TRIP_KEY, &self.trip, self.trip.is_empty())
    }
}

fn persist_entry<T>(store: &SessionStore, key: &str, value: &T, empty: bool) -> Result<(), StoreError>
where
    T: Serialize,
{
    if empty {
        store.remove(key)
    } else {
        store.save(key, value)
    }
}

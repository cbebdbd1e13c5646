use std::path::PathBuf;

use jila_api::models::rider::Rider;
use jila_routing::{GeoPoint, Route};
use jila_session::{
    ClientSession, SessionStore, StoreError, TripUpdate,
    store::{RIDE_REQUEST_KEY, RIDER_KEY, TRIP_KEY},
};

struct TempFolder(PathBuf);

impl TempFolder {
    fn new() -> Self {
        let path = std::env::temp_dir().join(format!("jila-store-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&path).unwrap();
        TempFolder(path)
    }
}

impl Drop for TempFolder {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

#[test]
fn test_rejects_missing_folder() {
    let folder = TempFolder::new();
    let missing = folder.0.join("missing");

    assert!(matches!(
        SessionStore::new(&missing),
        Err(StoreError::NotADirectory(path)) if path == missing
    ));
}

#[test]
fn test_load_missing_key() {
    let folder = TempFolder::new();
    let store = SessionStore::new(&folder.0).unwrap();

    let rider: Option<Rider> = store.load(RIDER_KEY).unwrap();
    assert!(rider.is_none());
    store.remove(RIDER_KEY).unwrap();
}

#[test]
fn test_save_and_load_uses_fixed_key_files() {
    let folder = TempFolder::new();
    let store = SessionStore::new(&folder.0).unwrap();

    let rider = Rider {
        id: 7,
        name: String::from("Mwila Banda"),
        ..Rider::default()
    };
    store.save(RIDER_KEY, &rider).unwrap();

    assert!(folder.0.join("rider.json").is_file());
    assert_eq!(store.load::<Rider>(RIDER_KEY).unwrap(), Some(rider));
}

#[test]
fn test_corrupt_snapshot_is_an_error() {
    let folder = TempFolder::new();
    std::fs::write(folder.0.join("trip.json"), "{ not json").unwrap();

    let store = SessionStore::new(&folder.0).unwrap();
    assert!(matches!(
        ClientSession::restore(&store),
        Err(StoreError::Serde(_))
    ));
}

#[test]
fn test_snapshot_with_empty_route_is_an_error() {
    let folder = TempFolder::new();
    std::fs::write(
        folder.0.join("trip.json"),
        r#"{
            "active_trip": null,
            "progress": null,
            "route": { "waypoints": [], "distance_metres": -5.0 },
            "last_update_time": null
        }"#,
    )
    .unwrap();

    let store = SessionStore::new(&folder.0).unwrap();
    assert!(matches!(
        ClientSession::restore(&store),
        Err(StoreError::Serde(_))
    ));
}

#[test]
fn test_client_session_round_trip() {
    let folder = TempFolder::new();
    let store = SessionStore::new(&folder.0).unwrap();

    let mut session = ClientSession::default();
    session.rider.set_rider(Rider {
        id: 7,
        ..Rider::default()
    });
    session.trip.set_route(
        Route::new(
            vec![GeoPoint::new(-15.4167, 28.2833), GeoPoint::new(-15.3308, 28.4526)],
            25_400.0,
        )
        .unwrap(),
    );
    session.trip.set_trip_update(TripUpdate {
        id: 42,
        distance: 1000.0,
        trip_status: String::from("IN_PROGRESS"),
        fare_total: 80.0,
    });
    session.trip.set_trip_update(TripUpdate {
        id: 42,
        distance: 250.0,
        trip_status: String::from("IN_PROGRESS"),
        fare_total: 80.0,
    });

    session.persist(&store).unwrap();
    assert!(!folder.0.join(format!("{}.json", RIDE_REQUEST_KEY)).exists());

    let restored = ClientSession::restore(&store).unwrap();
    assert_eq!(restored, session);
    assert!(restored.rider.is_rider_available());
    assert_eq!(restored.trip.progress_ratio(), 0.75);
    assert_eq!(restored.trip.progress().unwrap().initial_distance(), 1000.0);
}

#[test]
fn test_cleared_trip_is_removed_from_store() {
    let folder = TempFolder::new();
    let store = SessionStore::new(&folder.0).unwrap();

    let mut session = ClientSession::default();
    session.trip.set_trip_update(TripUpdate {
        id: 42,
        distance: 1000.0,
        trip_status: String::from("IN_PROGRESS"),
        fare_total: 80.0,
    });
    session.persist(&store).unwrap();
    assert!(folder.0.join(format!("{}.json", TRIP_KEY)).is_file());

    session.trip.clear();
    session.persist(&store).unwrap();
    assert!(!folder.0.join(format!("{}.json", TRIP_KEY)).exists());

    let restored = ClientSession::restore(&store).unwrap();
    assert!(!restored.trip.is_trip_active());
}

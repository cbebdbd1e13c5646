use clap::Args;
use jila_routing::GeoPoint;
use jila_session::{ClientSession, TripUpdate};
use tracing::{info, warn};

use crate::{config::JilaConfig, parsers};

#[derive(Args)]
pub struct ReplayArgs {
    /// Pickup point as LAT,LNG
    #[arg(short, long, value_parser = parsers::parse_geo_point, allow_hyphen_values = true)]
    from: GeoPoint,

    /// Drop-off point as LAT,LNG
    #[arg(short, long, value_parser = parsers::parse_geo_point, allow_hyphen_values = true)]
    to: GeoPoint,

    /// Remaining distances in meters, in arrival order
    #[arg(short, long, value_delimiter = ',', required = true)]
    distances: Vec<f64>,

    /// Trip id reported in the updates
    #[arg(long, default_value_t = 1)]
    trip_id: i64,
}

/// Feeds remaining-distance updates through a trip session and prints where
/// the vehicle marker lands after each one.
pub async fn run(config: &JilaConfig, args: ReplayArgs) -> anyhow::Result<()> {
    let store = config.session_store()?;
    let mut session = match &store {
        Some(store) => ClientSession::restore(store)?,
        None => ClientSession::default(),
    };

    session.trip.clear();

    match config.route_client().fetch_route(args.from, args.to).await {
        Some(route) => session.trip.set_route(route),
        None => warn!("No route available, only the progress ratio is tracked"),
    }

    let last = args.distances.len() - 1;
    for (i, distance) in args.distances.iter().enumerate() {
        session.trip.set_trip_update(TripUpdate {
            id: args.trip_id,
            distance: *distance,
            trip_status: String::from(if i == last { "COMPLETED" } else { "IN_PROGRESS" }),
            fare_total: 0.0,
        });

        match session.trip.marker_position() {
            Some(marker) => info!(
                "{:>10.1} m left, {:>5.1}% done, marker at {}",
                distance,
                session.trip.progress_ratio() * 100.0,
                marker
            ),
            None => info!(
                "{:>10.1} m left, {:>5.1}% done",
                distance,
                session.trip.progress_ratio() * 100.0
            ),
        }
    }

    if let Some(store) = store {
        session.persist(&store)?;
        info!("Trip snapshot saved in {}", store.folder().display());
    }

    Ok(())
}

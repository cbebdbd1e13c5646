use clap::Args;
use jila_routing::GeoPoint;
use tracing::info;

use crate::{config::JilaConfig, parsers};

#[derive(Args)]
pub struct RouteArgs {
    /// Pickup point as LAT,LNG
    #[arg(short, long, value_parser = parsers::parse_geo_point, allow_hyphen_values = true)]
    from: GeoPoint,

    /// Drop-off point as LAT,LNG
    #[arg(short, long, value_parser = parsers::parse_geo_point, allow_hyphen_values = true)]
    to: GeoPoint,

    /// Also print the point at this fraction of the route
    #[arg(short, long)]
    progress: Option<f64>,
}

pub async fn run(config: &JilaConfig, args: RouteArgs) -> anyhow::Result<()> {
    let client = config.route_client();

    let Some(route) = client.fetch_route(args.from, args.to).await else {
        anyhow::bail!("No route available between {} and {}", args.from, args.to);
    };

    info!(
        "Route with {} waypoints, {:.0} m reported, {:.0} m along the geometry",
        route.waypoints().len(),
        route.distance_metres(),
        route.geometry_length()
    );

    if let Some(progress) = args.progress {
        info!(
            "Point at {:.0}%: {}",
            progress * 100.0,
            route.point_at_progress(progress)
        );
    }

    Ok(())
}

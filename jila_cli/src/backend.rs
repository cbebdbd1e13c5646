use clap::{Args, Subcommand};
use jila_api::models::ride_request::format_ride_request_status;
use jila_session::ClientSession;
use tracing::info;

use crate::config::JilaConfig;

#[derive(Args)]
pub struct RideRequestsArgs {
    /// Rider whose requests are listed
    #[arg(short, long)]
    rider: i64,

    /// Only list requests in this status, e.g. PENDING
    #[arg(short, long)]
    status: Option<String>,
}

#[derive(Subcommand)]
pub enum BackendSubcommands {
    /// Fetch a rider and keep it in the local session
    Rider { id: i64 },
    /// List the ride requests of a rider
    RideRequests {
        #[command(flatten)]
        args: RideRequestsArgs,
    },
    /// Cancel a single ride request
    CancelRideRequest { id: i64 },
    /// Mark a trip as completed
    CompleteTrip { id: i64 },
    /// Drop the locally stored trip
    ClearTrip,
}

pub async fn run(config: &JilaConfig, command: BackendSubcommands) -> anyhow::Result<()> {
    match command {
        BackendSubcommands::Rider { id } => {
            let rider = config.backend_client()?.get_rider_by_id(id).await?;
            info!("Rider {}: {} <{}>", rider.id, rider.name, rider.email);

            update_session(config, |session| session.rider.set_rider(rider))?;
        }
        BackendSubcommands::RideRequests { args } => {
            let client = config.backend_client()?;
            let requests = match &args.status {
                Some(status) => {
                    client
                        .get_ride_requests_by_status_and_rider(args.rider, status)
                        .await?
                }
                None => client.get_ride_requests_by_rider(args.rider).await?,
            };

            for request in requests {
                info!(
                    "#{} {} -> {} [{}] {}",
                    request.id,
                    request.pickup_location,
                    request.drop_off_location,
                    format_ride_request_status(request.status().unwrap_or_default()),
                    request.requested_at
                );
            }
        }
        BackendSubcommands::CancelRideRequest { id } => {
            let cancelled = config.backend_client()?.cancel_ride_request(id).await?;
            info!("Ride request {} cancelled: {}", id, cancelled);

            if cancelled {
                update_session(config, |session| {
                    if session
                        .ride_request
                        .ride_request()
                        .is_some_and(|request| request.id == id)
                    {
                        session.ride_request.clear_ride_request();
                    }
                })?;
            }
        }
        BackendSubcommands::CompleteTrip { id } => {
            let completed = config.backend_client()?.mark_trip_as_completed(id).await?;
            info!("Trip {} completed: {}", id, completed);
        }
        BackendSubcommands::ClearTrip => {
            update_session(config, |session| session.trip.clear())?;
            info!("Trip cleared");
        }
    }

    Ok(())
}

fn update_session<F>(config: &JilaConfig, update: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut ClientSession),
{
    let Some(store) = config.session_store()? else {
        return Ok(());
    };

    let mut session = ClientSession::restore(&store)?;
    update(&mut session);
    session.persist(&store)?;

    Ok(())
}

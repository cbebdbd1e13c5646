use clap::Args;
use tracing::info;

use crate::config::JilaConfig;

#[derive(Args)]
pub struct SearchArgs {
    /// Free-text place query
    query: String,
}

pub async fn run(config: &JilaConfig, args: SearchArgs) -> anyhow::Result<()> {
    let places = config.search_client().search(&args.query).await;

    if places.is_empty() {
        info!("No place found for {:?}", args.query);
    }

    for place in places {
        info!("{} ({})", place.display_name, place.point());
    }

    Ok(())
}

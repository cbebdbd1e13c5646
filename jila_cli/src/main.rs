use clap::{Parser, Subcommand};

use crate::{
    backend::BackendSubcommands, config::JilaConfig, replay::ReplayArgs, route::RouteArgs,
    search::SearchArgs,
};

mod backend;
mod config;
mod parsers;
mod replay;
mod route;
mod search;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the driving route between two points
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// Search a place by name
    Search {
        #[command(flatten)]
        args: SearchArgs,
    },
    /// Replay remaining-distance updates along a route
    Replay {
        #[command(flatten)]
        args: ReplayArgs,
    },
    #[command(flatten)]
    Backend(BackendSubcommands),
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let config = JilaConfig::from_env();

    match cli.command {
        Some(Commands::Route { args }) => route::run(&config, args).await?,
        Some(Commands::Search { args }) => search::run(&config, args).await?,
        Some(Commands::Replay { args }) => replay::run(&config, args).await?,
        Some(Commands::Backend(command)) => backend::run(&config, command).await?,
        None => {
            // Handle no command provided
        }
    }

    Ok(())
}

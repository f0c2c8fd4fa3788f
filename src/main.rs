mod api;
mod cli;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api::SeerrClient;
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Resolve credentials before touching the network
    let config = Config::resolve(cli.api_key, cli.url)?;
    let client = SeerrClient::new(config);

    match cli.command {
        Commands::Search { query } => {
            cli::commands::search(&client, &query).await?;
        }
        Commands::AddMovie { media_id } => {
            cli::commands::add_movie(&client, media_id).await?;
        }
        Commands::AddTv { media_id, seasons } => {
            cli::commands::add_tv(&client, media_id, &seasons).await?;
        }
        Commands::GetAvailable {
            media_type,
            media_id,
        } => {
            cli::commands::get_available(&client, media_type, media_id).await?;
        }
    }

    Ok(())
}

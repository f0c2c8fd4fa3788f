use clap::{Parser, Subcommand};

use crate::api::MediaType;

/// seerr - a command-line client for Overseerr/Jellyseerr-compatible servers
#[derive(Parser)]
#[command(name = "seerr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Seerr API key (defaults to $SEERR_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Seerr server URL (defaults to $SEERR_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search for media
    #[command(alias = "s")]
    Search {
        /// Search query
        query: String,
    },

    /// Add a new request for a movie
    #[command(name = "add_movie")]
    AddMovie {
        /// The media ID to request
        media_id: i64,
    },

    /// Add a new request for a tv show
    #[command(name = "add_tv")]
    AddTv {
        /// The media ID to request
        media_id: i64,

        /// Seasons to request (defaults to all seasons)
        #[arg(long, num_args = 0..)]
        seasons: Vec<u32>,
    },

    /// Check current availability status in library
    #[command(name = "get_available")]
    GetAvailable {
        /// Whether the ID refers to a movie or a tv show
        #[arg(long)]
        media_type: MediaType,

        /// The media ID to look up
        media_id: i64,
    },
}

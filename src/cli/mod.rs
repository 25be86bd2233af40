//! CLI argument definitions and parsing.

pub mod types;

use std::{net::SocketAddr, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use types::TeamId;

use crate::config::{SnapshotNaming, DEFAULT_API_HOST, DEFAULT_DATA_DIR};

/// Upstream API arguments shared by commands that fetch
#[derive(Debug, Clone, Args)]
pub struct ApiArgs {
    /// RapidAPI access key (or set `RAPIDAPI_KEY`, also read from `.env`).
    #[clap(long)]
    pub api_key: Option<String>,

    /// Value of the `x-rapidapi-host` header.
    #[clap(long, env = "NHL_API_HOST", default_value = DEFAULT_API_HOST)]
    pub host: String,

    /// Override the scheme + authority requests go to (defaults to `https://<host>`).
    #[clap(long, env = "NHL_API_BASE_URL")]
    pub base_url: Option<String>,

    /// Upstream team id (21 = Toronto Maple Leafs).
    #[clap(long, short, env = "NHL_TEAM_ID", default_value_t = TeamId::default())]
    pub team_id: TeamId,

    /// Request timeout in seconds; unset uses the transport default.
    #[clap(long)]
    pub timeout_secs: Option<u64>,
}

/// Where snapshot files live and how they are named
#[derive(Debug, Clone, Args)]
pub struct SnapshotArgs {
    /// Directory for raw and processed snapshots.
    #[clap(long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Snapshot filename strategy.
    #[clap(long, value_enum, default_value_t = SnapshotNaming::Fixed)]
    pub naming: SnapshotNaming,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch the team roster and save the raw snapshot
    Fetch {
        #[clap(flatten)]
        api: ApiArgs,

        #[clap(flatten)]
        snapshots: SnapshotArgs,
    },

    /// Transform the latest raw snapshot into flat player records
    Transform {
        /// Raw snapshot to read (defaults to the latest in `--data-dir`).
        #[clap(long, short)]
        input: Option<PathBuf>,

        #[clap(flatten)]
        snapshots: SnapshotArgs,
    },

    /// Load the latest processed snapshot into the database
    Load {
        /// Processed snapshot to read (defaults to the latest in `--data-dir`).
        #[clap(long, short)]
        input: Option<PathBuf>,

        #[clap(flatten)]
        snapshots: SnapshotArgs,

        /// Clear all players from the database before loading
        #[clap(long)]
        clear_db: bool,
    },

    /// Run fetch → transform → load in one go
    Run {
        #[clap(flatten)]
        api: ApiArgs,

        #[clap(flatten)]
        snapshots: SnapshotArgs,

        /// Hand data between stages in memory only; write no snapshot files
        #[clap(long)]
        no_snapshots: bool,

        /// Clear all players from the database before loading
        #[clap(long)]
        clear_db: bool,
    },

    /// Serve the REST CRUD API
    Serve {
        /// Address to listen on.
        #[clap(long, default_value = "127.0.0.1:5000")]
        addr: SocketAddr,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "nhl-roster", about = "NHL roster ETL pipeline and REST API")]
pub struct NhlRoster {
    /// SQLite database file (or set `NHL_ROSTER_DB`).
    #[clap(long, global = true, env = "NHL_ROSTER_DB")]
    pub db: Option<PathBuf>,

    /// Log at debug level.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

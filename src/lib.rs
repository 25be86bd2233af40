//! NHL Roster ETL Library
//!
//! Fetches a team roster from the RapidAPI sports-information service,
//! flattens each athlete into a player record, and loads the records into a
//! SQLite table that is also exposed through a small REST CRUD API.
//!
//! ## Pipeline
//!
//! `START → FETCHED → TRANSFORMED → LOADED → DONE`, aborting on a fetch
//! failure, a payload without `team.athletes`, a snapshot I/O error, or a
//! load that inserted nothing. Individual bad athletes or records are
//! reported and skipped.
//!
//! ```rust,no_run
//! use nhl_roster::{config::ApiConfig, nhl::http::build_client, pipeline::Pipeline, storage::RosterDatabase};
//!
//! # async fn example() -> nhl_roster::Result<()> {
//! let config = ApiConfig::new("my-rapidapi-key");
//! let client = build_client(&config)?;
//! let mut db = RosterDatabase::new_in_memory()?;
//!
//! let report = Pipeline::new(config, None).run(&client, &mut db).await?;
//! println!("added {} players", report.inserted.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export RAPIDAPI_KEY=...
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod nhl;
pub mod pipeline;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{PlayerId, TeamId};
pub use error::{Result, RosterError};
pub use nhl::types::PlayerRecord;
pub use storage::{PlayerFields, RosterDatabase, StoredPlayer};

pub const API_KEY_ENV_VAR: &str = "RAPIDAPI_KEY";

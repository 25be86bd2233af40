//! `fetch`: pull the roster and save the raw snapshot.

use std::path::PathBuf;

use tracing::info;

use crate::{
    config::ApiConfig,
    core::SnapshotStore,
    nhl::{fetch_team_players, http::build_client},
    Result,
};

/// Fetch once and write the raw payload. Returns the snapshot path.
pub async fn handle_fetch(config: &ApiConfig, snapshots: &SnapshotStore) -> Result<PathBuf> {
    info!("Fetching player data...");
    let client = build_client(config)?;
    let raw = fetch_team_players(&client, config).await?;

    let path = snapshots.write_raw(&raw)?;
    info!(path = %path.display(), "Success! Player data saved");
    Ok(path)
}

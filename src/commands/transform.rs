//! `transform`: raw snapshot in, processed snapshot out.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::{
    core::{snapshot::read_snapshot, SnapshotStore},
    error::RosterError,
    nhl::transform,
    Result,
};

/// Transform `input` (or the latest raw snapshot) and write the processed
/// records next to it. Returns the processed snapshot path.
pub fn handle_transform(input: Option<&Path>, snapshots: &SnapshotStore) -> Result<PathBuf> {
    let input = match input {
        Some(path) => path.to_path_buf(),
        None => snapshots.latest_raw().ok_or_else(|| RosterError::Snapshot {
            path: snapshots.raw_path(),
            source: Box::new(RosterError::MalformedData {
                reason: "no raw snapshot found; run `fetch` first".to_string(),
            }),
        })?,
    };

    info!(input = %input.display(), "Processing player data");
    let raw = read_snapshot(&input)?;
    let outcome = transform(&raw)?;
    for reason in &outcome.skipped {
        warn!("{reason}");
    }

    let path = snapshots.write_processed(&outcome.records)?;
    info!(
        path = %path.display(),
        players = outcome.records.len(),
        "Successfully saved processed data"
    );
    Ok(path)
}

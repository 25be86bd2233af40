//! `load`: processed snapshot into the database.

use std::path::Path;

use tracing::warn;

use crate::{
    core::{snapshot::read_processed_snapshot, SnapshotStore},
    error::RosterError,
    pipeline,
    storage::{BulkCreateReport, RosterDatabase},
    Result,
};

pub fn handle_load(
    db: &mut RosterDatabase,
    input: Option<&Path>,
    snapshots: &SnapshotStore,
    clear_db: bool,
) -> Result<BulkCreateReport> {
    let input = match input {
        Some(path) => path.to_path_buf(),
        None => snapshots
            .latest_processed()
            .ok_or_else(|| RosterError::Snapshot {
                path: snapshots.processed_path(),
                source: Box::new(RosterError::MalformedData {
                    reason: "no processed snapshot found; run `transform` first".to_string(),
                }),
            })?,
    };

    let entries = read_processed_snapshot(&input)?;

    let report = if clear_db {
        pipeline::reload(db, &entries)?
    } else {
        pipeline::load(db, &entries)?
    };
    for error in &report.errors {
        warn!("{error}");
    }
    Ok(report)
}

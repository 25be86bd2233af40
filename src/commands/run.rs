//! `run`: the whole pipeline.

use tracing::{info, warn};

use crate::{
    config::ApiConfig,
    core::SnapshotStore,
    nhl::http::build_client,
    pipeline::{Pipeline, PipelineReport},
    storage::RosterDatabase,
    Result,
};

pub async fn handle_run(
    config: ApiConfig,
    snapshots: Option<SnapshotStore>,
    db: &mut RosterDatabase,
    clear_db: bool,
) -> Result<PipelineReport> {
    let client = build_client(&config)?;
    let report = Pipeline::new(config, snapshots)
        .with_clear_db(clear_db)
        .run(&client, db)
        .await?;

    info!(
        added = report.inserted.len(),
        skipped = report.skipped.len(),
        failed = report.errors.len(),
        "Pipeline complete"
    );
    for error in &report.errors {
        warn!("{error}");
    }
    Ok(report)
}

//! Fetch → transform → load, as a linear state machine
//!
//! Each stage either advances the run or aborts it. Per-record problems in
//! the transform and load stages are collected in the report and never stop
//! the run on their own; a load that inserts nothing does.

use std::fmt;
use std::path::PathBuf;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::{
    config::ApiConfig,
    core::SnapshotStore,
    error::RosterError,
    nhl::{fetch_team_players, transform},
    storage::{BulkCreateReport, RosterDatabase, StoredPlayer},
    Result,
};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PipelineStage {
    Start,
    Fetched,
    Transformed,
    Loaded,
    Done,
    Aborted,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Start => "START",
            PipelineStage::Fetched => "FETCHED",
            PipelineStage::Transformed => "TRANSFORMED",
            PipelineStage::Loaded => "LOADED",
            PipelineStage::Done => "DONE",
            PipelineStage::Aborted => "ABORTED",
        };
        f.write_str(name)
    }
}

/// What a completed run did
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    /// Every stage reached, in order
    pub stages: Vec<PipelineStage>,
    pub raw_snapshot: Option<PathBuf>,
    pub processed_snapshot: Option<PathBuf>,
    /// Athlete entries the transformer could not map
    pub skipped: Vec<String>,
    pub inserted: Vec<StoredPlayer>,
    /// Per-record load failures
    pub errors: Vec<String>,
}

impl PipelineReport {
    fn started() -> Self {
        Self {
            stages: vec![PipelineStage::Start],
            raw_snapshot: None,
            processed_snapshot: None,
            skipped: Vec::new(),
            inserted: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn stage(&self) -> PipelineStage {
        self.stages
            .last()
            .copied()
            .unwrap_or(PipelineStage::Start)
    }

    fn advance(&mut self, stage: PipelineStage) {
        info!(from = %self.stage(), to = %stage, "Pipeline stage");
        self.stages.push(stage);
    }

    /// Log the abort and hand the error back to the caller
    fn abort(&self, err: RosterError) -> RosterError {
        error!(
            stage = %self.stage(),
            to = %PipelineStage::Aborted,
            network = err.is_network(),
            error = %err,
            "Pipeline aborted"
        );
        err
    }
}

/// Insert transformed (or uploaded) entries; fails only when none went in.
pub fn load(db: &mut RosterDatabase, entries: &[Value]) -> Result<BulkCreateReport> {
    finish_load(db.bulk_create(entries))
}

/// Like [`load`], but the existing players are replaced. When nothing goes in
/// the store keeps its previous rows.
pub fn reload(db: &mut RosterDatabase, entries: &[Value]) -> Result<BulkCreateReport> {
    let (removed, report) = db.replace_all(entries)?;
    if report.is_success() {
        info!(removed, "Cleared existing players");
    }
    finish_load(report)
}

fn finish_load(report: BulkCreateReport) -> Result<BulkCreateReport> {
    info!(
        added = report.inserted.len(),
        failed = report.errors.len(),
        "Successfully added {} players",
        report.inserted.len()
    );

    if report.is_success() {
        Ok(report)
    } else {
        Err(RosterError::NothingLoaded {
            errors: report.errors,
        })
    }
}

pub struct Pipeline {
    config: ApiConfig,
    snapshots: Option<SnapshotStore>,
    clear_db: bool,
}

impl Pipeline {
    /// `snapshots = None` keeps the whole hand-off in memory.
    pub fn new(config: ApiConfig, snapshots: Option<SnapshotStore>) -> Self {
        Self {
            config,
            snapshots,
            clear_db: false,
        }
    }

    /// Replace the stored players at the load stage instead of adding to them
    pub fn with_clear_db(mut self, clear_db: bool) -> Self {
        self.clear_db = clear_db;
        self
    }

    /// One complete run against the upstream API
    pub async fn run(&self, client: &Client, db: &mut RosterDatabase) -> Result<PipelineReport> {
        let mut report = PipelineReport::started();

        info!(url = %self.config.endpoint_url(), "Fetching player data...");
        let raw = fetch_team_players(client, &self.config)
            .await
            .map_err(|e| report.abort(e))?;

        if let Some(store) = &self.snapshots {
            let path = store.write_raw(&raw).map_err(|e| report.abort(e))?;
            info!(path = %path.display(), "Player data saved");
            report.raw_snapshot = Some(path);
        }
        report.advance(PipelineStage::Fetched);

        self.transform_and_load(report, &raw, db)
    }

    /// Run the transform and load stages over a payload already in hand
    pub fn run_from_raw(&self, raw: &Value, db: &mut RosterDatabase) -> Result<PipelineReport> {
        let mut report = PipelineReport::started();
        report.advance(PipelineStage::Fetched);
        self.transform_and_load(report, raw, db)
    }

    fn transform_and_load(
        &self,
        mut report: PipelineReport,
        raw: &Value,
        db: &mut RosterDatabase,
    ) -> Result<PipelineReport> {
        let outcome = transform(raw).map_err(|e| report.abort(e))?;
        if !outcome.skipped.is_empty() {
            warn!(count = outcome.skipped.len(), "Some athletes were skipped");
        }

        if let Some(store) = &self.snapshots {
            let path = store
                .write_processed(&outcome.records)
                .map_err(|e| report.abort(e))?;
            info!(path = %path.display(), "Successfully saved processed data");
            report.processed_snapshot = Some(path);
        }
        report.skipped = outcome.skipped;
        report.advance(PipelineStage::Transformed);

        let entries = outcome
            .records
            .iter()
            .map(serde_json::to_value)
            .collect::<serde_json::Result<Vec<_>>>()
            .map_err(|e| report.abort(e.into()))?;

        let loaded = if self.clear_db {
            reload(db, &entries)
        } else {
            load(db, &entries)
        }
        .map_err(|e| report.abort(e))?;
        report.inserted = loaded.inserted;
        report.errors = loaded.errors;
        report.advance(PipelineStage::Loaded);

        report.advance(PipelineStage::Done);
        Ok(report)
    }
}

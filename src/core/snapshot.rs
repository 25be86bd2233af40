//! Snapshot files written between pipeline stages
//!
//! The raw upstream payload and the transformed record array are persisted
//! as pretty-printed JSON so a stage can be re-run from disk. The files are a
//! debugging and recovery aid; the pipeline hands data over in memory.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Local;
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};

use crate::{config::SnapshotNaming, error::RosterError, nhl::types::PlayerRecord, Result};

pub const RAW_STEM: &str = "nhl_players";
pub const PROCESSED_STEM: &str = "processed_players";

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Directory of snapshot files plus the naming strategy for this run.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
    naming: SnapshotNaming,
    /// Shared by the raw and processed files of one run.
    stamp: String,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>, naming: SnapshotNaming) -> Self {
        Self {
            dir: dir.into(),
            naming,
            stamp: Local::now().format("%Y%m%d_%H%M%S").to_string(),
        }
    }

    fn path_for(&self, stem: &str) -> PathBuf {
        match self.naming {
            SnapshotNaming::Fixed => self.dir.join(format!("{stem}.json")),
            SnapshotNaming::Timestamped => self.dir.join(format!("{stem}_{}.json", self.stamp)),
        }
    }

    pub fn raw_path(&self) -> PathBuf {
        self.path_for(RAW_STEM)
    }

    pub fn processed_path(&self) -> PathBuf {
        self.path_for(PROCESSED_STEM)
    }

    /// Write the raw payload with 4-space indentation. Object keys come out
    /// sorted because `serde_json::Map` is ordered.
    pub fn write_raw(&self, raw: &Value) -> Result<PathBuf> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        raw.serialize(&mut ser)?;

        let path = self.raw_path();
        write_string(&path, &String::from_utf8_lossy(&buf))?;
        Ok(path)
    }

    pub fn write_processed(&self, records: &[PlayerRecord]) -> Result<PathBuf> {
        let path = self.processed_path();
        write_string(&path, &serde_json::to_string_pretty(records)?)?;
        Ok(path)
    }

    /// Most recent file for `stem`: the fixed name, or the lexically greatest
    /// timestamped name.
    fn latest(&self, stem: &str) -> Option<PathBuf> {
        match self.naming {
            SnapshotNaming::Fixed => Some(self.path_for(stem)).filter(|p| p.exists()),
            SnapshotNaming::Timestamped => {
                let prefix = format!("{stem}_");
                fs::read_dir(&self.dir)
                    .ok()?
                    .filter_map(|entry| entry.ok())
                    .map(|entry| entry.path())
                    .filter(|p| {
                        p.file_name()
                            .and_then(|n| n.to_str())
                            .is_some_and(|n| n.starts_with(&prefix) && n.ends_with(".json"))
                    })
                    .max()
            }
        }
    }

    pub fn latest_raw(&self) -> Option<PathBuf> {
        self.latest(RAW_STEM)
    }

    pub fn latest_processed(&self) -> Option<PathBuf> {
        self.latest(PROCESSED_STEM)
    }
}

/// Read and parse a snapshot, tagging any failure with its path.
pub fn read_snapshot(path: &Path) -> Result<Value> {
    let wrap = |source: RosterError| RosterError::Snapshot {
        path: path.to_path_buf(),
        source: Box::new(source),
    };

    let contents = fs::read_to_string(path).map_err(|e| wrap(e.into()))?;
    serde_json::from_str(&contents).map_err(|e| wrap(e.into()))
}

/// Read a transformed snapshot; it must hold a JSON array.
pub fn read_processed_snapshot(path: &Path) -> Result<Vec<Value>> {
    match read_snapshot(path)? {
        Value::Array(entries) => Ok(entries),
        _ => Err(RosterError::Snapshot {
            path: path.to_path_buf(),
            source: Box::new(RosterError::MalformedData {
                reason: "expected an array of players".to_string(),
            }),
        }),
    }
}

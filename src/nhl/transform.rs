//! Reshape the upstream roster payload into flat player records.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::types::{PlayerRecord, RawAthlete};
use crate::{error::RosterError, Result};


/// Records that mapped cleanly plus a reason for every entry that did not.
#[derive(Debug, Clone, Default)]
pub struct TransformOutcome {
    pub records: Vec<PlayerRecord>,
    pub skipped: Vec<String>,
}

/// Inches to `F' I"`; absent or zero height reads as `N/A`.
pub fn convert_height(inches: Option<u32>) -> String {
    match inches {
        None | Some(0) => "N/A".to_string(),
        Some(h) => format!("{}' {}\"", h / 12, h % 12),
    }
}

/// Pull `team.athletes` out of the raw payload.
fn athletes(raw: &Value) -> Result<&Vec<Value>> {
    let team = raw
        .get("team")
        .ok_or_else(|| RosterError::MalformedData {
            reason: "missing team or athletes".to_string(),
        })?;

    team.get("athletes")
        .and_then(Value::as_array)
        .ok_or_else(|| RosterError::MalformedData {
            reason: "missing team or athletes".to_string(),
        })
}

/// Map every athlete entry, in input order. Entries that fail to decode are
/// skipped; only a payload without a `team.athletes` array is an error.
pub fn transform(raw: &Value) -> Result<TransformOutcome> {
    let entries = athletes(raw)?;
    let mut outcome = TransformOutcome::default();

    for (index, entry) in entries.iter().enumerate() {
        match RawAthlete::deserialize(entry) {
            Ok(athlete) => outcome.records.push(PlayerRecord::from(athlete)),
            Err(e) => {
                warn!(index, error = %e, "Skipping player due to processing error");
                outcome
                    .skipped
                    .push(format!("Skipping player at index {index}: {e}"));
            }
        }
    }

    debug!(
        processed = outcome.records.len(),
        skipped = outcome.skipped.len(),
        "Transformed athletes"
    );
    Ok(outcome)
}

//! Data models for the storage layer

use crate::{cli::types::PlayerId, nhl::types::PlayerRecord};
use serde::{Deserialize, Serialize};

/// Column names of the six data fields, in schema order.
pub const PLAYER_FIELDS: [&str; 6] = [
    "full_name",
    "age",
    "height",
    "weight",
    "position",
    "jersey_number",
];

/// A row of the `players` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPlayer {
    pub id: PlayerId,
    pub full_name: String,
    pub age: i64,
    pub height: String,
    pub weight: i64,
    pub position: String,
    pub jersey_number: String,
}

/// Write payload. Create needs every field; patch applies whichever are set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerFields {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub weight: Option<i64>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub jersey_number: Option<String>,
}

impl PlayerFields {
    /// First field (in schema order) that is not set
    pub fn first_missing(&self) -> Option<&'static str> {
        let present = [
            self.full_name.is_some(),
            self.age.is_some(),
            self.height.is_some(),
            self.weight.is_some(),
            self.position.is_some(),
            self.jersey_number.is_some(),
        ];
        PLAYER_FIELDS
            .iter()
            .zip(present)
            .find(|(_, set)| !set)
            .map(|(name, _)| *name)
    }
}

impl From<PlayerRecord> for PlayerFields {
    fn from(record: PlayerRecord) -> Self {
        Self {
            full_name: record.full_name,
            age: record.age,
            height: Some(record.height),
            weight: record.weight,
            position: record.position,
            jersey_number: record.jersey_number,
        }
    }
}

impl From<&StoredPlayer> for PlayerFields {
    fn from(player: &StoredPlayer) -> Self {
        Self {
            full_name: Some(player.full_name.clone()),
            age: Some(player.age),
            height: Some(player.height.clone()),
            weight: Some(player.weight),
            position: Some(player.position.clone()),
            jersey_number: Some(player.jersey_number.clone()),
        }
    }
}

/// Outcome of a bulk create: what went in, and why the rest did not
#[derive(Debug, Clone, Default, Serialize)]
pub struct BulkCreateReport {
    pub inserted: Vec<StoredPlayer>,
    pub errors: Vec<String>,
}

impl BulkCreateReport {
    /// A batch succeeds when at least one player was inserted
    pub fn is_success(&self) -> bool {
        !self.inserted.is_empty()
    }
}

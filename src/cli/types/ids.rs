//! ID types for players and teams.

use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for stored player IDs (the `players` primary key).
///
/// Serializes as a bare integer so it can sit directly in request and
/// response bodies.
///
/// # Examples
///
/// ```rust
/// use nhl_roster::PlayerId;
///
/// let id = PlayerId::new(5);
/// assert_eq!(id.as_i64(), 5);
/// assert_eq!(id.to_string(), "5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub i64);

impl PlayerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Id assigned to the entry at `index` of a bulk upload that carries no explicit id.
    pub fn from_position(index: usize) -> Self {
        Self(index as i64 + 1)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Upstream team identifier used in the `team-players/{id}` path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    /// Toronto Maple Leafs.
    pub const MAPLE_LEAFS: TeamId = TeamId(21);

    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl Default for TeamId {
    fn default() -> Self {
        Self::MAPLE_LEAFS
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| RosterError::MalformedData {
                reason: format!("invalid team id '{s}'"),
            })
    }
}

//! Runtime configuration: upstream endpoint, credentials and local paths.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::{cli::types::TeamId, error::RosterError, Result, API_KEY_ENV_VAR};

pub const DEFAULT_API_HOST: &str = "sports-information.p.rapidapi.com";
pub const DEFAULT_BASE_PATH: &str = "/nhl";
pub const DEFAULT_DATA_DIR: &str = "data";

/// Everything the fetcher needs to reach the player-listing endpoint.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Scheme + authority, e.g. `https://sports-information.p.rapidapi.com`.
    pub base_url: String,
    /// Sent as `x-rapidapi-host`.
    pub host: String,
    pub base_path: String,
    /// Sent as `x-rapidapi-key`.
    pub api_key: String,
    pub team_id: TeamId,
    /// `None` leaves reqwest's transport default in place.
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: format!("https://{DEFAULT_API_HOST}"),
            host: DEFAULT_API_HOST.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            api_key: api_key.into(),
            team_id: TeamId::default(),
            timeout: None,
        }
    }

    /// Point the client somewhere other than the public host (keeps the
    /// `x-rapidapi-host` header unchanged).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Change the host header, and the base URL with it.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self.base_url = format!("https://{}", self.host);
        self
    }

    pub fn with_team(mut self, team_id: TeamId) -> Self {
        self.team_id = team_id;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the team roster listing.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}{}/team-players/{}/",
            self.base_url, self.base_path, self.team_id
        )
    }
}

/// Resolve the access key from an explicit value or `RAPIDAPI_KEY`.
pub fn resolve_api_key(api_key: Option<String>) -> Result<String> {
    api_key
        .filter(|k| !k.trim().is_empty())
        .or_else(|| {
            std::env::var(API_KEY_ENV_VAR)
                .ok()
                .filter(|k| !k.trim().is_empty())
        })
        .ok_or_else(|| RosterError::MissingApiKey {
            env_var: API_KEY_ENV_VAR.to_string(),
        })
}

/// How snapshot files are named on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SnapshotNaming {
    /// `nhl_players.json`, overwritten on every run.
    #[default]
    Fixed,
    /// `nhl_players_20250101_120000.json`, one file per run.
    Timestamped,
}

impl fmt::Display for SnapshotNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotNaming::Fixed => write!(f, "fixed"),
            SnapshotNaming::Timestamped => write!(f, "timestamped"),
        }
    }
}

/// Path: <data_dir>/nhl-roster/nhl_players.db
pub fn default_database_path() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".local");
        home.push("share");
        home
    });
    base.join("nhl-roster").join("nhl_players.db")
}

//! Error types for the NHL roster pipeline

use std::path::PathBuf;
use thiserror::Error;

use crate::cli::types::PlayerId;

pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("Failed to parse JSON response. The API might be returning invalid JSON: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("Received empty response from API")]
    EmptyResponse,

    #[error("Invalid data structure - {reason}")]
    MalformedData { reason: String },

    #[error("Missing required field: {field}")]
    Validation { field: &'static str },

    #[error("Player ID {id} already exists")]
    Conflict { id: PlayerId },

    #[error("Player ID {id} doesn't exist")]
    NotFound { id: PlayerId },

    #[error("No players were loaded ({} errors)", .errors.len())]
    NothingLoaded { errors: Vec<String> },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("Could not read snapshot {}: {source}", .path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: Box<RosterError>,
    },
}

impl RosterError {
    /// Transport failures and non-2xx responses from the upstream API.
    pub fn is_network(&self) -> bool {
        matches!(self, RosterError::Network(_) | RosterError::Status { .. })
    }
}

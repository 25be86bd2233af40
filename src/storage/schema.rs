//! Database schema and connection management

use crate::{config::default_database_path, Result};
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

/// Owns the single connection used for every store operation.
pub struct RosterDatabase {
    pub(crate) conn: Connection,
}

impl RosterDatabase {
    /// Open the database at the default location
    pub fn new() -> Result<Self> {
        Self::open(default_database_path())
    }

    /// Open (or create) a database file and ensure tables exist
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref();

        // Ensure the parent directory exists
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        debug!(path = %db_path.display(), "Opening roster database");
        let conn = Connection::open(db_path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database, mainly for tests
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY,
                full_name VARCHAR(100) NOT NULL,
                age INTEGER NOT NULL,
                height VARCHAR(20) NOT NULL,
                weight INTEGER NOT NULL,
                position VARCHAR(50) NOT NULL,
                jersey_number VARCHAR(10) NOT NULL
            )",
            [],
        )?;

        Ok(())
    }
}

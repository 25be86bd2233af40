//! Player CRUD and bulk-create operations

use super::{models::*, schema::RosterDatabase};
use crate::{cli::types::PlayerId, error::RosterError, Result};
use rusqlite::{params, OptionalExtension, Row};
use serde_json::Value;
use tracing::{debug, warn};

const SELECT_PLAYER: &str = "SELECT id, full_name, age, height, weight, position, jersey_number
     FROM players";

impl RosterDatabase {
    /// Fetch one player by id
    pub fn get(&self, id: PlayerId) -> Result<StoredPlayer> {
        self.find(id)?.ok_or(RosterError::NotFound { id })
    }

    fn find(&self, id: PlayerId) -> Result<Option<StoredPlayer>> {
        let player = self
            .conn
            .query_row(
                &format!("{SELECT_PLAYER} WHERE id = ?"),
                params![id.as_i64()],
                row_to_player,
            )
            .optional()?;
        Ok(player)
    }

    /// All players, ordered by id
    pub fn list(&self) -> Result<Vec<StoredPlayer>> {
        let mut stmt = self.conn.prepare(&format!("{SELECT_PLAYER} ORDER BY id"))?;
        let rows = stmt.query_map([], row_to_player)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    pub fn count(&self) -> Result<usize> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;
        Ok(n as usize)
    }

    /// Insert a new player. Every field is required and the id must be unused.
    pub fn create(&mut self, id: PlayerId, fields: &PlayerFields) -> Result<StoredPlayer> {
        let player = match fields {
            PlayerFields {
                full_name: Some(full_name),
                age: Some(age),
                height: Some(height),
                weight: Some(weight),
                position: Some(position),
                jersey_number: Some(jersey_number),
            } => StoredPlayer {
                id,
                full_name: full_name.clone(),
                age: *age,
                height: height.clone(),
                weight: *weight,
                position: position.clone(),
                jersey_number: jersey_number.clone(),
            },
            _ => {
                return Err(RosterError::Validation {
                    field: fields.first_missing().unwrap_or("unknown"),
                })
            }
        };

        if self.find(id)?.is_some() {
            return Err(RosterError::Conflict { id });
        }

        self.conn.execute(
            "INSERT INTO players (id, full_name, age, height, weight, position, jersey_number)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                player.id.as_i64(),
                player.full_name,
                player.age,
                player.height,
                player.weight,
                player.position,
                player.jersey_number
            ],
        )?;
        debug!(%id, name = %player.full_name, "Inserted player");
        Ok(player)
    }

    /// `full_replace` is the PUT path and behaves exactly like [`create`]:
    /// an existing id is a conflict, not a replacement. Otherwise this is a
    /// patch.
    ///
    /// [`create`]: RosterDatabase::create
    pub fn update(
        &mut self,
        id: PlayerId,
        fields: &PlayerFields,
        full_replace: bool,
    ) -> Result<StoredPlayer> {
        if full_replace {
            self.create(id, fields)
        } else {
            self.patch(id, fields)
        }
    }

    /// Overwrite only the supplied fields of an existing player
    pub fn patch(&mut self, id: PlayerId, fields: &PlayerFields) -> Result<StoredPlayer> {
        let rows_affected = self.conn.execute(
            "UPDATE players SET
                full_name = COALESCE(?, full_name),
                age = COALESCE(?, age),
                height = COALESCE(?, height),
                weight = COALESCE(?, weight),
                position = COALESCE(?, position),
                jersey_number = COALESCE(?, jersey_number)
             WHERE id = ?",
            params![
                fields.full_name,
                fields.age,
                fields.height,
                fields.weight,
                fields.position,
                fields.jersey_number,
                id.as_i64()
            ],
        )?;

        if rows_affected == 0 {
            return Err(RosterError::NotFound { id });
        }
        self.get(id)
    }

    pub fn delete(&mut self, id: PlayerId) -> Result<()> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM players WHERE id = ?", params![id.as_i64()])?;

        if rows_affected == 0 {
            return Err(RosterError::NotFound { id });
        }
        Ok(())
    }

    /// Create every entry that can be created. Ids come from an explicit
    /// `id` key, or from the entry's position (index + 1). Failures are
    /// collected per entry and never stop the batch.
    pub fn bulk_create(&mut self, entries: &[Value]) -> BulkCreateReport {
        let mut report = BulkCreateReport::default();

        for (index, entry) in entries.iter().enumerate() {
            match self.create_entry(index, entry) {
                Ok(player) => report.inserted.push(player),
                Err(message) => {
                    warn!(index, %message, "Player not added");
                    report.errors.push(message);
                }
            }
        }

        report
    }

    fn create_entry(
        &mut self,
        index: usize,
        entry: &Value,
    ) -> std::result::Result<StoredPlayer, String> {
        let processing_error =
            |e: &dyn std::fmt::Display| format!("Error processing player at index {index}: {e}");

        let object = entry
            .as_object()
            .ok_or_else(|| processing_error(&"expected a JSON object"))?;

        let id = match object.get("id") {
            None | Some(Value::Null) => PlayerId::from_position(index),
            Some(raw) => raw
                .as_i64()
                .map(PlayerId::new)
                .ok_or_else(|| processing_error(&format!("invalid id {raw}")))?,
        };

        let fields: PlayerFields =
            serde_json::from_value(entry.clone()).map_err(|e| processing_error(&e))?;
        if fields.first_missing().is_some() {
            return Err(format!("Missing required fields in player at index {index}"));
        }

        match self.create(id, &fields) {
            Ok(player) => Ok(player),
            Err(e @ RosterError::Conflict { .. }) => Err(format!(
                "Failed to add player {}: {e}",
                fields.full_name.as_deref().unwrap_or_default()
            )),
            Err(e) => Err(processing_error(&e)),
        }
    }

    /// Delete every player
    pub fn clear(&mut self) -> Result<usize> {
        Ok(self.conn.execute("DELETE FROM players", [])?)
    }

    /// Clear the table and bulk-create `entries` in one transaction. The
    /// transaction rolls back, keeping the previous rows, unless at least one
    /// entry went in. Returns the number of rows removed alongside the report.
    pub fn replace_all(&mut self, entries: &[Value]) -> Result<(usize, BulkCreateReport)> {
        self.conn.execute_batch("BEGIN")?;

        let removed = match self.clear() {
            Ok(removed) => removed,
            Err(e) => {
                self.conn.execute_batch("ROLLBACK")?;
                return Err(e);
            }
        };

        let report = self.bulk_create(entries);
        if report.is_success() {
            self.conn.execute_batch("COMMIT")?;
            Ok((removed, report))
        } else {
            self.conn.execute_batch("ROLLBACK")?;
            debug!("Nothing inserted, previous players restored");
            Ok((0, report))
        }
    }
}

/// Helper to convert database row to StoredPlayer
fn row_to_player(row: &Row) -> rusqlite::Result<StoredPlayer> {
    Ok(StoredPlayer {
        id: PlayerId::new(row.get(0)?),
        full_name: row.get(1)?,
        age: row.get(2)?,
        height: row.get(3)?,
        weight: row.get(4)?,
        position: row.get(5)?,
        jersey_number: row.get(6)?,
    })
}

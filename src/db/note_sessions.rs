//! Per-user note recording flag.
//!
//! The flag lives in the store rather than in process memory so that the
//! mode survives restarts and stays correct when several worker processes
//! serve the same user. A user without a row reads as inactive.

use crate::db::db::Db;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const SCHEMA_NOTE_SESSIONS: &str = "CREATE TABLE IF NOT EXISTS note_sessions (
    user_id INTEGER NOT NULL PRIMARY KEY,
    active INTEGER NOT NULL DEFAULT 0
);";
const SELECT_ACTIVE: &str = "SELECT active FROM note_sessions WHERE user_id = ?1";
const UPSERT_ACTIVE: &str = "INSERT INTO note_sessions (user_id, active) VALUES (?1, ?2)
    ON CONFLICT(user_id) DO UPDATE SET active = excluded.active";

pub struct NoteSessions {
    conn: Connection,
}

impl NoteSessions {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_NOTE_SESSIONS, [])?;
        Ok(NoteSessions { conn: db.conn })
    }

    pub fn is_active(&mut self, user_id: i64) -> Result<bool> {
        let active = self
            .conn
            .query_row(SELECT_ACTIVE, params![user_id], |row| row.get::<_, bool>(0))
            .optional()?;
        Ok(active.unwrap_or(false))
    }

    pub fn set_active(&mut self, user_id: i64, active: bool) -> Result<()> {
        self.conn.execute(UPSERT_ACTIVE, params![user_id, active])?;
        Ok(())
    }
}

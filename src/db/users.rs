use crate::db::db::Db;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const SCHEMA_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER NOT NULL PRIMARY KEY,
    display_name TEXT
);";
const UPSERT_USER: &str = "INSERT INTO users (id, display_name) VALUES (?1, ?2)
    ON CONFLICT(id) DO UPDATE SET display_name = COALESCE(excluded.display_name, display_name)";
const SELECT_NAME: &str = "SELECT display_name FROM users WHERE id = ?1";

pub struct Users {
    conn: Connection,
}

impl Users {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_USERS, [])?;
        Ok(Users { conn: db.conn })
    }

    /// Registers a user on first interaction; keeps an existing display name
    /// when none is supplied. Users are never deleted.
    pub fn ensure(&mut self, user_id: i64, display_name: Option<&str>) -> Result<()> {
        self.conn.execute(UPSERT_USER, params![user_id, display_name])?;
        Ok(())
    }

    pub fn display_name(&mut self, user_id: i64) -> Result<Option<String>> {
        let name = self
            .conn
            .query_row(SELECT_NAME, params![user_id], |row| row.get::<_, Option<String>>(0))
            .optional()?;
        Ok(name.flatten())
    }
}

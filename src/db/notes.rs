//! Database operations for daily notes.
//!
//! Notes are immutable once written: a calendar date, a time-of-day string
//! and the free text. Ordering inside a day follows (time, insertion order).

use crate::db::db::Db;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};

const SCHEMA_NOTES: &str = "CREATE TABLE IF NOT EXISTS notes (
    id INTEGER NOT NULL PRIMARY KEY,
    user_id INTEGER NOT NULL,
    date DATE NOT NULL,
    time TEXT NOT NULL,
    text TEXT NOT NULL
);";
const INSERT_NOTE: &str = "INSERT INTO notes (user_id, date, time, text) VALUES (?1, ?2, ?3, ?4)";
const SELECT_RANGE: &str = "SELECT id, user_id, date, time, text FROM notes
    WHERE user_id = ?1 AND date >= ?2 AND date <= ?3
    ORDER BY date, time, id";

#[derive(Debug, Clone)]
pub struct Note {
    pub id: i64,
    pub user_id: i64,
    pub date: NaiveDate,
    pub time: String,
    pub text: String,
}

pub struct Notes {
    conn: Connection,
}

fn map_note(row: &Row) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        user_id: row.get(1)?,
        date: row.get(2)?,
        time: row.get(3)?,
        text: row.get(4)?,
    })
}

impl Notes {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_NOTES, [])?;
        Ok(Notes { conn: db.conn })
    }

    pub fn append(&mut self, user_id: i64, date: NaiveDate, time: &str, text: &str) -> Result<Note> {
        self.conn.execute(INSERT_NOTE, params![user_id, date, time, text])?;
        Ok(Note {
            id: self.conn.last_insert_rowid(),
            user_id,
            date,
            time: time.to_string(),
            text: text.to_string(),
        })
    }

    /// Notes with `start_date <= date <= end_date`, ordered by
    /// (date, time, insertion order).
    pub fn fetch_range(&mut self, user_id: i64, start_date: NaiveDate, end_date: NaiveDate) -> Result<Vec<Note>> {
        let mut stmt = self.conn.prepare(SELECT_RANGE)?;
        let note_iter = stmt.query_map(params![user_id, start_date, end_date], map_note)?;

        let mut notes = Vec::new();
        for note in note_iter {
            notes.push(note?);
        }
        Ok(notes)
    }
}

//! Database operations for attendance intervals.
//!
//! An interval is one presence span at a location: a mandatory start
//! timestamp and an optional end (NULL while the user is still there).
//! The store upholds the core invariant: for any (user, location) pair at
//! most one interval has a NULL end at any time. Every compound
//! check-then-write runs inside a transaction on a mutex-guarded connection
//! so concurrent requests from the same user (a double-tapped button)
//! cannot race the invariant.
//!
//! Timestamps are stored as timezone-aware ISO-8601 text; range filters go
//! through SQLite's `datetime()` so comparisons are offset-correct.

use crate::db::db::Db;
use anyhow::Result;
use chrono::{DateTime, Local};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;

const SCHEMA_INTERVALS: &str = "CREATE TABLE IF NOT EXISTS intervals (
    id INTEGER NOT NULL PRIMARY KEY,
    user_id INTEGER NOT NULL,
    location TEXT NOT NULL,
    start TIMESTAMP NOT NULL,
    end TIMESTAMP,
    auto_closed INTEGER NOT NULL DEFAULT 0
);";
const SELECT_OPEN: &str = "SELECT id, user_id, location, start, end, auto_closed FROM intervals
    WHERE user_id = ?1 AND location = ?2 AND end IS NULL ORDER BY id DESC LIMIT 1";
const INSERT_OPEN: &str = "INSERT INTO intervals (user_id, location, start) VALUES (?1, ?2, ?3)";
const INSERT_CLOSED: &str = "INSERT INTO intervals (user_id, location, start, end, auto_closed) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_CLOSE: &str = "UPDATE intervals SET end = ?2, auto_closed = ?3 WHERE id = ?1";
const SELECT_BY_ID: &str = "SELECT id, user_id, location, start, end, auto_closed FROM intervals WHERE id = ?1";
const SELECT_RANGE: &str = "SELECT id, user_id, location, start, end, auto_closed FROM intervals
    WHERE user_id = ?1 AND datetime(start) >= datetime(?2) AND datetime(start) < datetime(?3)
    ORDER BY datetime(start), id";

#[derive(Debug, Clone)]
pub struct Interval {
    pub id: i64,
    pub user_id: i64,
    pub location: String,
    pub start: DateTime<Local>,
    pub end: Option<DateTime<Local>>,
    pub auto_closed: bool,
}

/// Outcome of an atomic open attempt.
#[derive(Debug)]
pub enum OpenAttempt {
    /// A new open interval was inserted.
    Opened(Interval),
    /// An open interval for the same (user, location) already exists;
    /// nothing was written.
    Conflict(Interval),
}

pub struct Intervals {
    pub conn: Arc<Mutex<Connection>>,
}

fn map_interval(row: &Row) -> rusqlite::Result<Interval> {
    Ok(Interval {
        id: row.get(0)?,
        user_id: row.get(1)?,
        location: row.get(2)?,
        start: row.get(3)?,
        end: row.get(4)?,
        auto_closed: row.get(5)?,
    })
}

impl Intervals {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_INTERVALS, [])?;
        Ok(Intervals {
            conn: Arc::new(Mutex::new(db.conn)),
        })
    }

    /// Returns the open interval for (user, location), if any.
    pub fn find_open(&self, user_id: i64, location: &str) -> Result<Option<Interval>> {
        let conn = self.conn.lock();
        let interval = conn.query_row(SELECT_OPEN, params![user_id, location], map_interval).optional()?;
        Ok(interval)
    }

    /// Atomically inserts a new open interval unless one already exists for
    /// the same (user, location).
    pub fn insert_open_checked(&self, user_id: i64, location: &str, start: DateTime<Local>) -> Result<OpenAttempt> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;

        if let Some(existing) = tx.query_row(SELECT_OPEN, params![user_id, location], map_interval).optional()? {
            tx.commit()?;
            return Ok(OpenAttempt::Conflict(existing));
        }

        tx.execute(INSERT_OPEN, params![user_id, location, start])?;
        let id = tx.last_insert_rowid();
        let inserted = tx.query_row(SELECT_BY_ID, params![id], map_interval)?;
        tx.commit()?;
        Ok(OpenAttempt::Opened(inserted))
    }

    /// Atomically closes the most recent open interval for (user, location).
    /// Returns `None` when nothing is open; the store is left untouched.
    pub fn close_latest_open(&self, user_id: i64, location: &str, end: DateTime<Local>, auto_closed: bool) -> Result<Option<Interval>> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;

        let open = tx.query_row(SELECT_OPEN, params![user_id, location], map_interval).optional()?;
        let Some(open) = open else {
            tx.commit()?;
            return Ok(None);
        };

        tx.execute(UPDATE_CLOSE, params![open.id, end, auto_closed])?;
        let closed = tx.query_row(SELECT_BY_ID, params![open.id], map_interval)?;
        tx.commit()?;
        Ok(Some(closed))
    }

    /// Inserts an already-closed interval, used for confirmed auto
    /// entry-and-exit records where start and end coincide.
    pub fn insert_closed(
        &self,
        user_id: i64,
        location: &str,
        start: DateTime<Local>,
        end: DateTime<Local>,
        auto_closed: bool,
    ) -> Result<Interval> {
        let conn = self.conn.lock();
        conn.execute(INSERT_CLOSED, params![user_id, location, start, end, auto_closed])?;
        let inserted = conn.query_row(SELECT_BY_ID, params![conn.last_insert_rowid()], map_interval)?;
        Ok(inserted)
    }

    /// Intervals whose start falls inside `[from, to)`, start ascending.
    pub fn fetch_range(&self, user_id: i64, from: DateTime<Local>, to: DateTime<Local>) -> Result<Vec<Interval>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(SELECT_RANGE)?;
        let interval_iter = stmt.query_map(params![user_id, from, to], map_interval)?;

        let mut intervals = Vec::new();
        for interval in interval_iter {
            intervals.push(interval?);
        }
        Ok(intervals)
    }
}

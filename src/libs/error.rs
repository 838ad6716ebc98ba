//! User-facing error taxonomy.
//!
//! Only errors the user can correct themselves live here; they are surfaced
//! as chat/console guidance naming the expected input. Recoverable flow states
//! (exit with nothing open, entry while already open) are NOT errors - the
//! engine models them as result variants so callers can prompt the user.
//! Storage failures propagate as `anyhow::Error` and get a generic
//! retry-later message at the boundary.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum HozurError {
    /// A date literal did not parse as `YYYY-MM-DD` in the display calendar.
    #[error("invalid date '{0}', expected YYYY-MM-DD in the Persian calendar")]
    InvalidDateFormat(String),

    /// An unknown report period token was supplied.
    #[error("unknown period '{0}', expected daily, weekly or monthly")]
    InvalidPeriod(String),
}

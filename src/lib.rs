//! # Hozur - conversational attendance tracking
//!
//! An attendance assistant engine: users declare arrival and departure at
//! named locations, the engine reconstructs presence intervals, aggregates
//! duration per location and period, and renders reports for chat display
//! or tabular export. A per-user recording mode turns free-text messages
//! into daily notes.
//!
//! ## Features
//!
//! - **Interval Reconciliation**: At most one open interval per
//!   (user, location); conflicting entries are rejected, dangling exits are
//!   resolved through an explicit confirmation flow
//! - **Reports**: Daily, weekly, monthly and custom ranges with per-location
//!   subtotals
//! - **Persian Calendar Display**: Internal Gregorian storage, Jalali
//!   user-facing dates
//! - **Daily Notes**: Per-user recording mode with date-range retrieval
//! - **Data Export**: CSV, JSON and Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hozur::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;

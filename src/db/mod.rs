pub mod db;
pub mod intervals;
pub mod note_sessions;
pub mod notes;
pub mod users;

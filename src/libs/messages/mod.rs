//! User-facing message catalog.
//!
//! `Message` holds every piece of wording the application emits; the
//! helpers wrap a message with the severity emoji used across all
//! transports, so console output and chat text stay identical.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

pub fn success(msg: Message) -> String {
    format!("✅ {}", msg)
}

pub fn error(msg: Message) -> String {
    format!("❌ {}", msg)
}

pub fn warning(msg: Message) -> String {
    format!("⚠️  {}", msg)
}

pub fn info(msg: Message) -> String {
    format!("ℹ️  {}", msg)
}

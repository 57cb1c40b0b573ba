//! Interactive mode: a prompt loop that re-runs the pipeline on every entry.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::{InteractiveSession, SessionConfig};

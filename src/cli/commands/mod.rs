//! Subcommand implementations.

/// Default command: clean, split and translate one input.
pub mod clean;

/// Interactive mode command handler.
pub mod interactive;

/// Provider listing command handler.
pub mod providers;

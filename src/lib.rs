//! # tidy - Text Cleaner & Sentence Translator
//!
//! `tidy` takes pasted text with hard line breaks and stray spacing, turns it
//! into clean prose, splits it into sentences and shows each sentence next to
//! its translation.
//!
//! ## Pipeline
//!
//! 1. [`text::clean_paragraph`] joins wrapped lines and repairs spacing
//! 2. [`text::split_sentences`] splits on `.`, `!` and `?`
//! 3. [`translation::translate_sentences`] translates each sentence on its own;
//!    a failure becomes `"[Translation Error]"` for that sentence only
//! 4. [`pipeline::pair_sentences`] lines sentences up with their translations
//!
//! ## Quick Start
//!
//! ```bash
//! # Clean and translate a file (Vietnamese by default)
//! tidy ./notes.txt
//!
//! # From stdin, into French, as JSON
//! pbpaste | tidy --to fr --format json
//!
//! # Only clean and split
//! tidy --to none ./notes.txt
//!
//! # Interactive mode
//! tidy interactive
//! ```
//!
//! ## Configuration
//!
//! Settings are read from `~/.config/tidy/config.toml`:
//!
//! ```toml
//! [tidy]
//! to = "ja"
//! provider = "ollama"
//! model = "gemma3:12b"
//!
//! [providers.ollama]
//! endpoint = "http://localhost:11434"
//! models = ["gemma3:12b"]
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading from files and stdin.
pub mod input;

/// Interactive prompt mode.
pub mod interactive;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// The clean → split → translate → pair pipeline.
pub mod pipeline;

/// Text normalization and sentence splitting.
pub mod text;

/// Translation providers and the per-sentence translation loop.
pub mod translation;

/// Terminal UI components (spinner, colors, rendering).
pub mod ui;

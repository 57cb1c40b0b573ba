//! XDG-style path utilities.
//!
//! Prefers XDG Base Directory conventions over OS-specific locations, so the
//! config lives in `~/.config/tidy` on macOS too.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "tidy";

/// Returns the configuration directory.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/tidy` if `XDG_CONFIG_HOME` is set and non-empty
/// 2. `~/.config/tidy` otherwise
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".config").join(APP_DIR))
}

//! XDG-style path utilities for the configuration directory.
//!
//! Paths follow XDG Base Directory conventions on every platform rather
//! than OS-specific locations.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "rag-chat";

/// Returns the configuration directory for rag-chat.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/rag-chat` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/rag-chat` otherwise
///
/// # Errors
///
/// Returns an error if `XDG_CONFIG_HOME` is unset and the home directory
/// cannot be determined.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".config").join(APP_DIR))
}

//! XDG-style path utilities.
//!
//! Configuration lives under the XDG config directory on every platform
//! instead of the OS-specific location `dirs` would pick.

use std::path::PathBuf;

use anyhow::{Context, Result};

const APP_DIR: &str = "cs-translator";

/// Returns the configuration directory.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/cs-translator` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/cs-translator` otherwise
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".config").join(APP_DIR))
}

/// Returns the path of the configuration file.
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

// DriftBrowser platform paths for Linux
// Config: ~/.config/driftbrowser
// Data:   ~/.local/share/driftbrowser
// Cache:  ~/.cache/driftbrowser

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for DriftBrowser on Linux.
/// Uses `$XDG_CONFIG_HOME/driftbrowser` if set, otherwise `~/.config/driftbrowser`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("driftbrowser")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("driftbrowser")
    }
}

/// Returns the data directory for DriftBrowser on Linux.
/// Uses `$XDG_DATA_HOME/driftbrowser` if set, otherwise `~/.local/share/driftbrowser`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("driftbrowser")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("driftbrowser")
    }
}

/// Returns the cache directory for DriftBrowser on Linux.
/// Uses `$XDG_CACHE_HOME/driftbrowser` if set, otherwise `~/.cache/driftbrowser`.
pub fn get_cache_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CACHE_HOME") {
        PathBuf::from(xdg).join("driftbrowser")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".cache").join("driftbrowser")
    }
}

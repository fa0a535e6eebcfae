// DriftBrowser platform paths for macOS
// Config: ~/Library/Application Support/DriftBrowser
// Data:   ~/Library/Application Support/DriftBrowser
// Cache:  ~/Library/Caches/DriftBrowser

use std::env;
use std::path::PathBuf;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for DriftBrowser on macOS.
/// `~/Library/Application Support/DriftBrowser`
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("DriftBrowser")
}

/// Returns the data directory for DriftBrowser on macOS.
/// `~/Library/Application Support/DriftBrowser`
pub fn get_data_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("DriftBrowser")
}

/// Returns the cache directory for DriftBrowser on macOS.
/// `~/Library/Caches/DriftBrowser`
pub fn get_cache_dir() -> PathBuf {
    home_dir().join("Library").join("Caches").join("DriftBrowser")
}

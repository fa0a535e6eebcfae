// DriftBrowser platform paths for Windows
// Config: %APPDATA%/DriftBrowser
// Data:   %APPDATA%/DriftBrowser
// Cache:  %LOCALAPPDATA%/DriftBrowser/cache

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for DriftBrowser on Windows.
/// `%APPDATA%/DriftBrowser`
pub fn get_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("DriftBrowser")
}

/// Returns the data directory for DriftBrowser on Windows.
/// `%APPDATA%/DriftBrowser`
pub fn get_data_dir() -> PathBuf {
    let appdata = env::var("APPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("DriftBrowser")
}

/// Returns the cache directory for DriftBrowser on Windows.
/// `%LOCALAPPDATA%/DriftBrowser/cache`
pub fn get_cache_dir() -> PathBuf {
    let local_appdata = env::var("LOCALAPPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Local"));
    PathBuf::from(local_appdata)
        .join("DriftBrowser")
        .join("cache")
}

// DriftBrowser platform abstraction
// Provides platform-specific paths for Windows, macOS, and Linux: the config
// directory holds settings.json, the data directory holds the browser
// database, and the cache directory holds share snapshots.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for DriftBrowser.
///
/// - **Linux**: `~/.config/driftbrowser` (or `$XDG_CONFIG_HOME/driftbrowser`)
/// - **macOS**: `~/Library/Application Support/DriftBrowser`
/// - **Windows**: `%APPDATA%/DriftBrowser`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the platform-specific data directory for DriftBrowser.
///
/// - **Linux**: `~/.local/share/driftbrowser` (or `$XDG_DATA_HOME/driftbrowser`)
/// - **macOS**: `~/Library/Application Support/DriftBrowser`
/// - **Windows**: `%APPDATA%/DriftBrowser`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}

/// Returns the platform-specific cache directory for DriftBrowser.
///
/// - **Linux**: `~/.cache/driftbrowser` (or `$XDG_CACHE_HOME/driftbrowser`)
/// - **macOS**: `~/Library/Caches/DriftBrowser`
/// - **Windows**: `%LOCALAPPDATA%/DriftBrowser/cache`
pub fn get_cache_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_cache_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_cache_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_cache_dir()
    }
}

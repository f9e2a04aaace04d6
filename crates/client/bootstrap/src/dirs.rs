//! Platform-specific directory utilities
//!
//! Provides consistent directory paths across different operating systems,
//! following platform conventions for cache and data directories.

use std::path::PathBuf;

const APP_NAME: &str = "bowling";

/// Get the platform-specific log directory
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/bowling/logs`
/// - Linux: `~/.cache/bowling/logs` (or `$XDG_CACHE_HOME/bowling/logs`)
/// - Windows: `%LOCALAPPDATA%\bowling\cache\logs`
/// - Fallback: `/tmp/bowling/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join(APP_NAME))
        .join("logs")
}

/// Get the platform-specific data directory
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/bowling`
/// - Linux: `~/.local/share/bowling` (or `$XDG_DATA_HOME/bowling`)
/// - Windows: `%APPDATA%\bowling\data`
/// - Fallback: `./bowling_data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./bowling_data"))
}

//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Where games are stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StorageKind {
    /// One JSON file per game under the data directory.
    #[default]
    File,
    /// Process memory only; games are lost on exit.
    Memory,
}

/// Configuration required to bootstrap the session layer.
#[derive(Clone, Debug, Default)]
pub struct RuntimeConfig {
    pub storage: StorageKind,
    /// Overrides the platform data directory.
    pub data_dir: Option<PathBuf>,
    /// Names the log directory of this run.
    pub session_id: Option<String>,
    /// Settings that were rejected while loading, for logging once a
    /// subscriber is installed.
    pub warnings: Vec<String>,
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BOWLING_STORAGE` - `file` or `memory` (default: file)
    /// - `BOWLING_DATA_DIR` - Directory for stored games (default: platform-specific)
    /// - `BOWLING_SESSION_ID` - Session identifier for log files (default: timestamp)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(storage) = env::var("BOWLING_STORAGE") {
            config = config.with_storage(&storage);
        }

        config.data_dir = env::var("BOWLING_DATA_DIR").ok().map(PathBuf::from);
        config.session_id = env::var("BOWLING_SESSION_ID").ok();

        config
    }

    /// Selects storage by name, keeping the current kind and recording a
    /// warning when `name` is unknown.
    pub fn with_storage(mut self, name: &str) -> Self {
        match name.trim().parse::<StorageKind>() {
            Ok(storage) => self.storage = storage,
            Err(_) => self.warnings.push(format!(
                "Unknown BOWLING_STORAGE value '{name}'; using {}",
                self.storage
            )),
        }
        self
    }

    /// Directory game files are written to.
    pub fn games_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(crate::dirs::data_dir)
            .join("games")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_kind_parses_case_insensitively() {
        assert_eq!("memory".parse::<StorageKind>(), Ok(StorageKind::Memory));
        assert_eq!("FILE".parse::<StorageKind>(), Ok(StorageKind::File));
        assert!("sheets".parse::<StorageKind>().is_err());
        assert_eq!(StorageKind::Memory.to_string(), "memory");
    }

    #[test]
    fn unknown_storage_is_kept_as_a_warning() {
        let config = RuntimeConfig::default().with_storage("Memory");
        assert_eq!(config.storage, StorageKind::Memory);
        assert!(config.warnings.is_empty());

        let config = config.with_storage("sheets");
        assert_eq!(config.storage, StorageKind::Memory);
        assert_eq!(
            config.warnings,
            vec!["Unknown BOWLING_STORAGE value 'sheets'; using memory".to_string()]
        );
    }

    #[test]
    fn games_dir_honors_override() {
        let config = RuntimeConfig {
            data_dir: Some(PathBuf::from("/var/lib/bowling")),
            ..RuntimeConfig::default()
        };
        assert_eq!(config.games_dir(), PathBuf::from("/var/lib/bowling/games"));
    }
}

//! File-based GameRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use bowling_core::GameConfig;
use chrono::NaiveDate;

use super::error::{RepositoryError, Result};
use super::traits::GameRepository;
use super::types::{GameKey, GameRecord};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// File-based implementation of GameRepository.
///
/// Stores each game as `game_{date}_{number}.json` (pretty-printed JSON)
/// under `base_dir`. Writes go to a temp file first and are renamed into
/// place.
pub struct FileGameRepository {
    base_dir: PathBuf,
}

impl FileGameRepository {
    /// Create a new file-based game repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a game file.
    fn game_path(&self, key: GameKey) -> PathBuf {
        self.base_dir.join(format!(
            "game_{}_{}.json",
            key.date.format(DATE_FORMAT),
            key.game
        ))
    }

    /// Reads the record stored at `path` and checks that it is the game
    /// `key` with pin counts a rack can hold.
    fn read_record(path: &Path, key: GameKey) -> Result<GameRecord> {
        let json = fs::read_to_string(path).map_err(RepositoryError::Io)?;
        let record: GameRecord =
            serde_json::from_str(&json).map_err(|e| RepositoryError::Json(e.to_string()))?;

        if record.key != key {
            return Err(RepositoryError::CorruptedData(format!(
                "{} holds {}",
                path.display(),
                record.key
            )));
        }
        if let Some(pins) = record
            .throws
            .slots()
            .iter()
            .flatten()
            .find(|&&pins| pins > GameConfig::PINS)
        {
            return Err(RepositoryError::CorruptedData(format!(
                "{} records a throw of {} pins",
                path.display(),
                pins
            )));
        }

        Ok(record)
    }

    /// Parses `game_{date}_{number}.json` back into a key.
    fn parse_file_name(filename: &str) -> Option<GameKey> {
        let stem = filename.strip_prefix("game_")?.strip_suffix(".json")?;
        let (date, game) = stem.rsplit_once('_')?;
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT).ok()?;
        let game = game.parse().ok()?;
        Some(GameKey::new(date, game))
    }
}

impl GameRepository for FileGameRepository {
    fn list(&self, date: NaiveDate) -> Result<Vec<GameRecord>> {
        let mut records = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(key) = Self::parse_file_name(filename)
                && key.date == date
            {
                records.push(Self::read_record(&path, key)?);
            }
        }

        records.sort_by_key(|record| record.key);
        Ok(records)
    }

    fn load(&self, key: GameKey) -> Result<Option<GameRecord>> {
        let path = self.game_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let record = Self::read_record(&path, key)?;

        tracing::debug!("Loaded {} from {}", key, path.display());

        Ok(Some(record))
    }

    fn save(&self, record: &GameRecord) -> Result<()> {
        let path = self.game_path(record.key);
        let temp_path = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;
        fs::write(&temp_path, json).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved {} to {}", record.key, path.display());

        Ok(())
    }

    fn delete(&self, key: GameKey) -> Result<bool> {
        let path = self.game_path(key);

        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(&path).map_err(RepositoryError::Io)?;
        tracing::info!("Deleted {}", key);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_game_file_names() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 25).unwrap();
        assert_eq!(
            FileGameRepository::parse_file_name("game_2023-01-25_3.json"),
            Some(GameKey::new(date, 3))
        );
        assert_eq!(
            FileGameRepository::parse_file_name("game_2023-01-25_3.json.tmp"),
            None
        );
        assert_eq!(FileGameRepository::parse_file_name("notes.txt"), None);
        assert_eq!(
            FileGameRepository::parse_file_name("game_yesterday_1.json"),
            None
        );
    }
}

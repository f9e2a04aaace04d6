//! In-memory GameRepository implementation for tests and offline runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::NaiveDate;

use super::error::{RepositoryError, Result};
use super::traits::GameRepository;
use super::types::{GameKey, GameRecord};

/// In-memory implementation of GameRepository.
///
/// Thread-safe but not persistent across process restarts.
pub struct InMemoryGameRepository {
    games: RwLock<BTreeMap<GameKey, GameRecord>>,
}

impl InMemoryGameRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            games: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create a repository pre-populated with `records`.
    pub fn with_records(records: impl IntoIterator<Item = GameRecord>) -> Self {
        let games = records
            .into_iter()
            .map(|record| (record.key, record))
            .collect();
        Self {
            games: RwLock::new(games),
        }
    }
}

impl Default for InMemoryGameRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRepository for InMemoryGameRepository {
    fn list(&self, date: NaiveDate) -> Result<Vec<GameRecord>> {
        let games = self.games.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(games
            .range(GameKey::new(date, 0)..=GameKey::new(date, u32::MAX))
            .map(|(_, record)| record.clone())
            .collect())
    }

    fn load(&self, key: GameKey) -> Result<Option<GameRecord>> {
        let games = self.games.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(games.get(&key).cloned())
    }

    fn save(&self, record: &GameRecord) -> Result<()> {
        let mut games = self
            .games
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        games.insert(record.key, record.clone());
        Ok(())
    }

    fn delete(&self, key: GameKey) -> Result<bool> {
        let mut games = self
            .games
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(games.remove(&key).is_some())
    }
}

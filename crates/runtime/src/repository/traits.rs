//! Repository contract for persisting bowled games.

use chrono::NaiveDate;

use super::error::Result;
use super::types::{GameKey, GameRecord};

/// Repository for game records keyed by date and game number.
///
/// This is the only place games leave the scoring core; transport and schema
/// are up to the implementation.
pub trait GameRepository: Send + Sync {
    /// Load every game bowled on `date`, ordered by game number.
    fn list(&self, date: NaiveDate) -> Result<Vec<GameRecord>>;

    /// Load a single game.
    fn load(&self, key: GameKey) -> Result<Option<GameRecord>>;

    /// Insert or overwrite a game.
    fn save(&self, record: &GameRecord) -> Result<()>;

    /// Delete a game. Returns false if it did not exist.
    fn delete(&self, key: GameKey) -> Result<bool>;

    /// Number of games bowled on `date`.
    fn games_played(&self, date: NaiveDate) -> Result<u32> {
        Ok(self.list(date)?.len() as u32)
    }

    /// Create and store an empty record for the next game on `date`.
    ///
    /// The new number follows the highest existing one, so deleting a game
    /// never causes a later game to be overwritten.
    fn create_game(&self, date: NaiveDate) -> Result<GameRecord> {
        let next = self
            .list(date)?
            .iter()
            .map(|record| record.key.game)
            .max()
            .unwrap_or(0)
            + 1;
        let record = GameRecord::new(GameKey::new(date, next));
        self.save(&record)?;
        Ok(record)
    }

    /// Check if a game exists.
    fn exists(&self, key: GameKey) -> bool {
        matches!(self.load(key), Ok(Some(_)))
    }
}

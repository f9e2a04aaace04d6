//! Operations on games that are already stored.

use bowling_core::parse_correction;
use chrono::NaiveDate;

use crate::api::{Result, RuntimeError};
use crate::repository::{GameKey, GameRecord, GameRepository};

/// Loads a game or reports it missing.
pub fn load_game(repository: &dyn GameRepository, key: GameKey) -> Result<GameRecord> {
    repository
        .load(key)?
        .ok_or(RuntimeError::GameNotFound { key })
}

/// Games on `date`, optionally narrowed to a single game number.
pub fn find_games(
    repository: &dyn GameRepository,
    date: NaiveDate,
    game: Option<u32>,
) -> Result<Vec<GameRecord>> {
    match game {
        Some(game) => load_game(repository, GameKey::new(date, game)).map(|record| vec![record]),
        None => Ok(repository.list(date)?),
    }
}

/// Applies a correction line `frame t1 t2 [t3]` to a stored game.
///
/// The frame is verified before anything is written; running totals are
/// recomputed from the corrected log.
pub fn correct_game(
    repository: &dyn GameRepository,
    key: GameKey,
    line: &str,
) -> Result<GameRecord> {
    let mut record = load_game(repository, key)?;
    let correction = parse_correction(line)?;

    let mut throws = record.throws;
    correction.apply_to(&mut throws)?;
    record.update(throws);
    repository.save(&record)?;

    tracing::info!("Corrected frame {} of {}", correction.frame, key);
    Ok(record)
}

/// Deletes a stored game.
pub fn delete_game(repository: &dyn GameRepository, key: GameKey) -> Result<()> {
    if repository.delete(key)? {
        Ok(())
    } else {
        Err(RuntimeError::GameNotFound { key })
    }
}

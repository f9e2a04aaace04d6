//! Stored game record types.

use std::fmt;

use bowling_core::{RunningTotals, Scorecard, ThrowLog};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifies a game: the date it was bowled and its number on that date.
///
/// Game numbers start at 1 for each date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameKey {
    pub date: NaiveDate,
    pub game: u32,
}

impl GameKey {
    pub const fn new(date: NaiveDate, game: u32) -> Self {
        Self { date, game }
    }
}

impl fmt::Display for GameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} game {}", self.date.format("%Y-%m-%d"), self.game)
    }
}

/// A persisted game: its throw-log plus the derived running totals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub key: GameKey,
    pub throws: ThrowLog,
    pub totals: RunningTotals,
}

impl GameRecord {
    /// Creates an empty record for a game about to be bowled.
    pub fn new(key: GameKey) -> Self {
        Self {
            key,
            throws: ThrowLog::new(),
            totals: [None; 10],
        }
    }

    /// Creates a record from a throw-log, deriving its totals.
    pub fn with_throws(key: GameKey, throws: ThrowLog) -> Self {
        let mut record = Self::new(key);
        record.update(throws);
        record
    }

    /// Replaces the throw-log and recomputes the totals.
    pub fn update(&mut self, throws: ThrowLog) {
        self.throws = throws;
        self.recompute_totals();
    }

    pub fn recompute_totals(&mut self) {
        self.totals = Scorecard::from_log(&self.throws).running_totals;
    }

    pub fn scorecard(&self) -> Scorecard {
        Scorecard::from_log(&self.throws)
    }

    /// Final score, once every frame can be scored.
    pub fn final_score(&self) -> Option<u16> {
        self.totals[self.totals.len() - 1]
    }
}

use core::fmt;

use bitflags::bitflags;

use crate::config::GameConfig;

bitflags! {
    /// Marks made on the last frame that entitle the bowler to extra throws.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct BonusFlags: u8 {
        /// Throw 1 of the last frame was a strike.
        const FIRST_STRIKE = 1 << 0;
        /// Throw 2 of the last frame cleared the rack (second strike or spare).
        const SECOND_CLEAR = 1 << 1;
    }
}

/// Position of live entry within a game.
///
/// Mutated only by [`crate::GameEngine`], one validated throw at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryState {
    /// Current frame, 1-based.
    pub frame: u8,
    /// Current throw within the frame, 1-based.
    pub throw: u8,
    /// Pins still standing for the current throw.
    pub pins_remaining: u8,
    /// Last-frame marks granting bonus throws.
    pub bonus: BonusFlags,
}

impl EntryState {
    /// State at the first throw of a game.
    pub const fn initial() -> Self {
        Self {
            frame: 1,
            throw: 1,
            pins_remaining: GameConfig::PINS,
            bonus: BonusFlags::empty(),
        }
    }

    pub const fn is_last_frame(&self) -> bool {
        self.frame == GameConfig::LAST_FRAME
    }

    /// Returns true when a mark was made on the first two throws of the
    /// last frame.
    pub fn earned_bonus_throw(&self) -> bool {
        !self.bonus.is_empty()
    }

    /// Advances to throw 1 of the next frame on a fresh rack.
    pub(crate) fn next_frame(&mut self) {
        self.frame += 1;
        self.throw = 1;
        self.pins_remaining = GameConfig::PINS;
    }
}

impl Default for EntryState {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for EntryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame {} Throw {}", self.frame, self.throw)
    }
}

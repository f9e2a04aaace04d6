use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// Pin counts actually thrown in a single frame, in order.
pub type FrameThrows = ArrayVec<u8, { GameConfig::LAST_FRAME_THROWS }>;

/// Outcome of a frame's first two throws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum FrameKind {
    /// All ten pins on the first throw.
    Strike,
    /// All ten pins across the first two throws.
    Spare,
    /// Pins left standing after two throws.
    Open,
    /// Not enough throws recorded yet.
    Incomplete,
}

impl FrameKind {
    /// Classifies a frame from its first two throw slots.
    pub fn classify(first: Option<u8>, second: Option<u8>) -> Self {
        match (first, second) {
            (Some(GameConfig::PINS), _) => Self::Strike,
            (Some(a), Some(b)) if u16::from(a) + u16::from(b) == u16::from(GameConfig::PINS) => {
                Self::Spare
            }
            (Some(_), Some(_)) => Self::Open,
            _ => Self::Incomplete,
        }
    }

    /// Returns true for strikes and spares.
    pub const fn is_mark(&self) -> bool {
        matches!(self, Self::Strike | Self::Spare)
    }
}

/// Rule constants for ten-pin bowling.
///
/// The throw-log layout and every legality check are derived from these
/// values, so the engine, validator and calculator agree on frame offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    /// Pins standing on a fresh rack.
    pub const PINS: u8 = 10;
    /// Frames in a game.
    pub const FRAMES: u8 = 10;
    /// Index of the last frame (the one with bonus throws).
    pub const LAST_FRAME: u8 = Self::FRAMES;
    /// Throw slots reserved for each of frames 1-9.
    pub const THROWS_PER_FRAME: usize = 2;
    /// Throw slots reserved for the last frame.
    pub const LAST_FRAME_THROWS: usize = 3;
    /// Total slots in a throw-log: 9 frames * 2 + 3.
    pub const LOG_SLOTS: usize =
        (Self::FRAMES as usize - 1) * Self::THROWS_PER_FRAME + Self::LAST_FRAME_THROWS;
    /// First throw-log index of the last frame.
    pub const LAST_FRAME_OFFSET: usize = (Self::FRAMES as usize - 1) * Self::THROWS_PER_FRAME;

    /// Returns the number of throw slots a frame occupies, or `None` for an
    /// out-of-range frame number.
    pub const fn slots_for(frame: u8) -> Option<usize> {
        match frame {
            0 => None,
            f if f < Self::LAST_FRAME => Some(Self::THROWS_PER_FRAME),
            f if f == Self::LAST_FRAME => Some(Self::LAST_FRAME_THROWS),
            _ => None,
        }
    }

    /// Returns the throw-log index of `throw` (1-based) within `frame` (1-based).
    pub const fn slot_index(frame: u8, throw: u8) -> Option<usize> {
        match Self::slots_for(frame) {
            Some(slots) if throw >= 1 && (throw as usize) <= slots => {
                Some((frame as usize - 1) * Self::THROWS_PER_FRAME + throw as usize - 1)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_layout_matches_frame_offsets() {
        assert_eq!(GameConfig::LOG_SLOTS, 21);
        assert_eq!(GameConfig::LAST_FRAME_OFFSET, 18);
        assert_eq!(GameConfig::slot_index(1, 1), Some(0));
        assert_eq!(GameConfig::slot_index(9, 2), Some(17));
        assert_eq!(GameConfig::slot_index(10, 3), Some(20));
        assert_eq!(GameConfig::slot_index(9, 3), None);
        assert_eq!(GameConfig::slot_index(0, 1), None);
        assert_eq!(GameConfig::slot_index(11, 1), None);
    }
}

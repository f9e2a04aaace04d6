use crate::config::GameConfig;

use super::frame::{FrameKind, FrameThrows};

/// Flat per-throw record of a whole game.
///
/// Slots `2(k-1)` and `2(k-1)+1` hold frame `k` for frames 1-9; the last
/// frame owns slots 18, 19 and 20. A strike in frames 1-9 leaves its second
/// slot absent, as does any throw that has not happened yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ThrowLog {
    slots: [Option<u8>; GameConfig::LOG_SLOTS],
}

impl ThrowLog {
    /// Creates an empty log.
    pub const fn new() -> Self {
        Self {
            slots: [None; GameConfig::LOG_SLOTS],
        }
    }

    pub const fn from_slots(slots: [Option<u8>; GameConfig::LOG_SLOTS]) -> Self {
        Self { slots }
    }

    pub const fn slots(&self) -> &[Option<u8>; GameConfig::LOG_SLOTS] {
        &self.slots
    }

    /// Returns the pin count stored at `index`, if any.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.slots.get(index).copied().flatten()
    }

    /// Returns the raw slots reserved for `frame` (1-based).
    pub fn frame_slots(&self, frame: u8) -> Option<&[Option<u8>]> {
        let slots = GameConfig::slots_for(frame)?;
        let start = GameConfig::slot_index(frame, 1)?;
        Some(&self.slots[start..start + slots])
    }

    /// Returns the throws actually recorded for `frame`, in order.
    ///
    /// Stops at the first absent slot, so a strike in frames 1-9 yields `[10]`.
    pub fn frame_throws(&self, frame: u8) -> FrameThrows {
        self.frame_slots(frame)
            .map(|slots| slots.iter().map_while(|slot| *slot).collect())
            .unwrap_or_default()
    }

    /// Classifies `frame` from its first two slots.
    pub fn frame_kind(&self, frame: u8) -> FrameKind {
        match self.frame_slots(frame) {
            Some(slots) => FrameKind::classify(slots[0], slots[1]),
            None => FrameKind::Incomplete,
        }
    }

    /// Stores `pins` for `throw` of `frame`.
    ///
    /// Returns false if the frame/throw pair has no slot.
    pub fn record(&mut self, frame: u8, throw: u8, pins: u8) -> bool {
        match GameConfig::slot_index(frame, throw) {
            Some(index) => {
                self.slots[index] = Some(pins);
                true
            }
            None => false,
        }
    }

    /// Overwrites every slot of `frame` with `throws`.
    ///
    /// The caller validates the values first. For frames 1-9 a strike's
    /// second slot is stored absent; for the last frame an open frame's third
    /// slot is stored absent. Returns false on a frame/length mismatch.
    pub fn replace_frame(&mut self, frame: u8, throws: &[Option<u8>]) -> bool {
        let (Some(slots), Some(start)) =
            (GameConfig::slots_for(frame), GameConfig::slot_index(frame, 1))
        else {
            return false;
        };
        if throws.len() != slots {
            return false;
        }

        self.slots[start..start + slots].copy_from_slice(throws);

        match FrameKind::classify(throws[0], throws[1]) {
            FrameKind::Strike if frame < GameConfig::LAST_FRAME => self.slots[start + 1] = None,
            FrameKind::Open if frame == GameConfig::LAST_FRAME => self.slots[start + 2] = None,
            _ => {}
        }
        true
    }

    /// Number of throws recorded so far.
    pub fn throw_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

impl From<[Option<u8>; GameConfig::LOG_SLOTS]> for ThrowLog {
    fn from(slots: [Option<u8>; GameConfig::LOG_SLOTS]) -> Self {
        Self::from_slots(slots)
    }
}

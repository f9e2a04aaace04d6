//! Entry state transitions for a single validated throw.

use crate::config::GameConfig;
use crate::state::{BonusFlags, EntryState};

/// What a throw did to the frame being entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Step {
    /// More throws are owed in the current frame.
    Continue,
    /// The frame is finished and entry moved to the next one.
    FrameDone,
    /// The last frame's scoring throws are exhausted.
    GameDone,
}

/// Advances `state` by one throw of `pins`.
///
/// `pins` must already be legal for `state.pins_remaining`.
pub(super) fn advance(state: &mut EntryState, pins: u8) -> Step {
    debug_assert!(pins <= state.pins_remaining);

    if !state.is_last_frame() {
        return advance_early_frame(state, pins);
    }

    match state.throw {
        1 => {
            if pins == GameConfig::PINS {
                state.bonus.insert(BonusFlags::FIRST_STRIKE);
                state.pins_remaining = GameConfig::PINS;
            } else {
                state.pins_remaining -= pins;
            }
            state.throw = 2;
            Step::Continue
        }
        2 => {
            let cleared = pins == state.pins_remaining;
            if cleared {
                state.bonus.insert(BonusFlags::SECOND_CLEAR);
                state.pins_remaining = GameConfig::PINS;
            } else {
                state.pins_remaining -= pins;
            }

            if state.earned_bonus_throw() {
                state.throw = 3;
                Step::Continue
            } else {
                Step::GameDone
            }
        }
        _ => {
            state.pins_remaining -= pins;
            Step::GameDone
        }
    }
}

fn advance_early_frame(state: &mut EntryState, pins: u8) -> Step {
    if state.throw == 1 && pins != GameConfig::PINS {
        state.pins_remaining -= pins;
        state.throw = 2;
        return Step::Continue;
    }

    state.next_frame();
    Step::FrameDone
}

#[cfg(test)]
mod tests {
    use super::*;

    fn last_frame() -> EntryState {
        EntryState {
            frame: GameConfig::LAST_FRAME,
            ..EntryState::initial()
        }
    }

    #[test]
    fn strike_skips_second_throw() {
        let mut state = EntryState::initial();
        assert_eq!(advance(&mut state, 10), Step::FrameDone);
        assert_eq!((state.frame, state.throw, state.pins_remaining), (2, 1, 10));
    }

    #[test]
    fn second_throw_closes_frame() {
        let mut state = EntryState::initial();
        assert_eq!(advance(&mut state, 6), Step::Continue);
        assert_eq!((state.throw, state.pins_remaining), (2, 4));
        assert_eq!(advance(&mut state, 2), Step::FrameDone);
        assert_eq!((state.frame, state.throw, state.pins_remaining), (2, 1, 10));
    }

    #[test]
    fn double_in_last_frame_resets_rack_for_third_throw() {
        let mut state = last_frame();
        assert_eq!(advance(&mut state, 10), Step::Continue);
        assert_eq!(advance(&mut state, 10), Step::Continue);
        assert_eq!((state.throw, state.pins_remaining), (3, 10));
        assert_eq!(
            state.bonus,
            BonusFlags::FIRST_STRIKE | BonusFlags::SECOND_CLEAR
        );
        assert_eq!(advance(&mut state, 10), Step::GameDone);
    }

    #[test]
    fn strike_then_partial_leaves_pins_for_third_throw() {
        let mut state = last_frame();
        advance(&mut state, 10);
        assert_eq!(advance(&mut state, 4), Step::Continue);
        assert_eq!((state.throw, state.pins_remaining), (3, 6));
    }

    #[test]
    fn spare_in_last_frame_grants_third_throw() {
        let mut state = last_frame();
        advance(&mut state, 7);
        assert_eq!(advance(&mut state, 3), Step::Continue);
        assert_eq!((state.throw, state.pins_remaining), (3, 10));
        assert_eq!(state.bonus, BonusFlags::SECOND_CLEAR);
    }

    #[test]
    fn open_last_frame_ends_game() {
        let mut state = last_frame();
        advance(&mut state, 7);
        assert_eq!(advance(&mut state, 2), Step::GameDone);
        assert!(!state.earned_bonus_throw());
    }
}

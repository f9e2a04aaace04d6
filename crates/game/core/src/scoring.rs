//! Score calculation from a throw-log.
//!
//! Every function here is a pure function of the log, so a front end can call
//! them after each throw to show a live scoreboard.
//!
//! Bonus throws are read in throw order across the following frames, skipping
//! the empty second slot of strikes: a strike adds the next two throws, a
//! spare the next one. Frame 9 looks into the last frame's first two throws,
//! and the last frame scores only its own pins.

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::ThrowLog;

const FRAMES: usize = GameConfig::FRAMES as usize;
const PINS: u16 = GameConfig::PINS as u16;

/// Per-frame scores; `None` until the frame's bonus throws are known.
pub type FrameScores = [Option<u16>; FRAMES];

/// Cumulative totals; `None` from the first unresolved frame onward.
pub type RunningTotals = [Option<u16>; FRAMES];

/// A total was requested for a frame whose score is still pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("frame {frame} cannot be scored yet")]
pub struct IncompleteScore {
    /// First frame (1-based) whose score is unresolved.
    pub frame: u8,
}

impl GameError for IncompleteScore {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Pending
    }

    fn error_code(&self) -> &'static str {
        "INCOMPLETE_SCORE"
    }
}

/// Computes the score of each of the ten frames.
pub fn frame_scores(log: &ThrowLog) -> FrameScores {
    let mut scores = [None; FRAMES];
    for (frame, score) in (1..=GameConfig::FRAMES).zip(scores.iter_mut()) {
        *score = frame_score(log, frame);
    }
    scores
}

/// Prefix sums of `scores`; an unresolved frame blocks every later total.
pub fn running_totals(scores: &FrameScores) -> RunningTotals {
    let mut totals = [None; FRAMES];
    let mut sum = Some(0u16);
    for (total, score) in totals.iter_mut().zip(scores) {
        sum = sum.zip(*score).map(|(acc, score)| acc + score);
        *total = sum;
    }
    totals
}

fn frame_score(log: &ThrowLog, frame: u8) -> Option<u16> {
    let slots = log.frame_slots(frame)?;
    let first = u16::from(slots[0]?);

    if frame == GameConfig::LAST_FRAME {
        let second = u16::from(slots[1]?);
        let own = first + second;
        return if first == PINS || own == PINS {
            Some(own + u16::from(slots[2]?))
        } else {
            Some(own)
        };
    }

    let mut bonus = throws_after(log, frame).map(u16::from);
    if first == PINS {
        let next = bonus.next()?;
        let after = bonus.next()?;
        return Some(PINS + next + after);
    }

    let second = u16::from(slots[1]?);
    if first + second == PINS {
        Some(PINS + bonus.next()?)
    } else {
        Some(first + second)
    }
}

/// Throws recorded after `frame`, in order, ending at the first frame that is
/// still waiting for a throw.
fn throws_after(log: &ThrowLog, frame: u8) -> impl Iterator<Item = u8> + '_ {
    ((frame + 1)..=GameConfig::LAST_FRAME)
        .scan(true, move |open, next| {
            if !*open {
                return None;
            }
            let throws = log.frame_throws(next);
            *open = next < GameConfig::LAST_FRAME
                && (throws.first() == Some(&GameConfig::PINS)
                    || throws.len() == GameConfig::THROWS_PER_FRAME);
            Some(throws)
        })
        .flatten()
}

/// Frame scores and running totals computed together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scorecard {
    pub frame_scores: FrameScores,
    pub running_totals: RunningTotals,
}

impl Scorecard {
    pub fn from_log(log: &ThrowLog) -> Self {
        let frame_scores = frame_scores(log);
        Self {
            running_totals: running_totals(&frame_scores),
            frame_scores,
        }
    }

    /// Total through the last frame, once it is known.
    pub fn final_score(&self) -> Option<u16> {
        self.running_totals[FRAMES - 1]
    }

    /// Total through `frame` (1-based).
    pub fn total_through(&self, frame: u8) -> Result<u16, IncompleteScore> {
        let index = usize::from(frame.clamp(1, GameConfig::FRAMES)) - 1;
        self.running_totals[index].ok_or_else(|| IncompleteScore {
            frame: self.first_pending().unwrap_or(frame),
        })
    }

    /// First frame (1-based) whose score is not yet known.
    pub fn first_pending(&self) -> Option<u8> {
        self.frame_scores
            .iter()
            .position(Option::is_none)
            .map(|index| index as u8 + 1)
    }

    pub fn is_complete(&self) -> bool {
        self.first_pending().is_none()
    }
}

/// Convenience wrapper around [`Scorecard::from_log`].
pub fn scorecard(log: &ThrowLog) -> Scorecard {
    Scorecard::from_log(log)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_of(slots: &[Option<u8>]) -> ThrowLog {
        let mut all = [None; GameConfig::LOG_SLOTS];
        all[..slots.len()].copy_from_slice(slots);
        ThrowLog::from_slots(all)
    }

    #[test]
    fn spare_strike_open_sequence() {
        let log = log_of(&[Some(5), Some(5), Some(10), None, Some(3), Some(4)]);
        let card = Scorecard::from_log(&log);

        assert_eq!(card.frame_scores[..3], [Some(20), Some(17), Some(7)]);
        assert_eq!(card.running_totals[..3], [Some(20), Some(37), Some(44)]);
        assert_eq!(card.frame_scores[3], None);
        assert_eq!(card.first_pending(), Some(4));
    }

    #[test]
    fn strike_waits_for_two_throws() {
        let log = log_of(&[Some(10), None, Some(10), None]);
        let scores = frame_scores(&log);
        assert_eq!(scores[0], None);
        assert_eq!(scores[1], None);

        let log = log_of(&[Some(10), None, Some(10), None, Some(4)]);
        let scores = frame_scores(&log);
        assert_eq!(scores[0], Some(24));
        assert_eq!(scores[1], None);
    }

    #[test]
    fn strike_waits_for_unfinished_next_frame() {
        let log = log_of(&[Some(10), None, Some(3)]);
        assert_eq!(frame_scores(&log)[0], None);
    }

    #[test]
    fn running_totals_block_after_pending_frame() {
        let scores = [
            Some(5),
            None,
            Some(7),
            Some(7),
            Some(7),
            Some(7),
            Some(7),
            Some(7),
            Some(7),
            Some(7),
        ];
        let totals = running_totals(&scores);
        assert_eq!(totals[0], Some(5));
        assert!(totals[1..].iter().all(Option::is_none));
    }

    #[test]
    fn total_through_reports_pending_frame() {
        let log = log_of(&[Some(3), Some(4), Some(10), None]);
        let card = Scorecard::from_log(&log);
        assert_eq!(card.total_through(1), Ok(7));
        assert_eq!(card.total_through(5), Err(IncompleteScore { frame: 2 }));
        assert_eq!(card.final_score(), None);
    }
}

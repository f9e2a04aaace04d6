//! Live game entry.
//!
//! The [`GameEngine`] is the only writer of an in-progress game's
//! [`EntryState`] and [`ThrowLog`]. It accepts one input at a time, rejects
//! illegal throws without changing state, and reports frame and game
//! completion so the caller can persist progress.

mod errors;
mod transition;

pub use errors::{CorrectionError, EngineError};

use crate::config::GameConfig;
use crate::rules::{FrameCorrection, ThrowParseError, parse_throw};
use crate::scoring::Scorecard;
use crate::state::{EntryState, ThrowLog};

use transition::Step;

/// Lifecycle of a game held by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Completed,
    Aborted,
}

/// One line of user input during entry, classified before parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryCommand<'a> {
    /// Abandon the game.
    Quit,
    /// Suspend entry to correct an earlier frame.
    Modify,
    /// Anything else is a throw token.
    Throw(&'a str),
}

impl<'a> EntryCommand<'a> {
    pub fn parse(input: &'a str) -> Self {
        match input.trim() {
            "q" | "Q" => Self::Quit,
            "m" | "M" => Self::Modify,
            token => Self::Throw(token),
        }
    }
}

/// Result of submitting one input to the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThrowOutcome {
    /// Throw recorded; the frame still owes throws.
    Accepted(EntryState),
    /// Token rejected; state unchanged, prompt for the same throw again.
    Invalid(ThrowParseError),
    /// Frame `frame` (1-9) is finished; `state` points at the next frame.
    FrameComplete { frame: u8, state: EntryState },
    /// The last frame is finished; carries the final log.
    GameComplete(ThrowLog),
    /// The user quit; the caller should discard the partial game.
    Aborted,
    /// The user asked to correct an earlier frame; state unchanged.
    ModifyRequested,
}

/// Interactive state machine for entering a game throw by throw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEngine {
    state: EntryState,
    log: ThrowLog,
    status: GameStatus,
}

impl GameEngine {
    /// Starts a new game at frame 1, throw 1, on a full rack.
    pub fn start() -> Self {
        Self {
            state: EntryState::initial(),
            log: ThrowLog::new(),
            status: GameStatus::InProgress,
        }
    }

    pub fn state(&self) -> EntryState {
        self.state
    }

    pub fn log(&self) -> &ThrowLog {
        &self.log
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Live scorecard for the throws entered so far.
    pub fn scorecard(&self) -> Scorecard {
        Scorecard::from_log(&self.log)
    }

    /// Number of frames whose throws are fully entered.
    pub fn completed_frames(&self) -> u8 {
        match self.status {
            GameStatus::Completed => GameConfig::FRAMES,
            _ => self.state.frame - 1,
        }
    }

    /// Submits one line of user input.
    ///
    /// `q` aborts, `m` requests a correction, anything else is parsed as a
    /// throw against the pins currently standing.
    pub fn submit_throw(&mut self, input: &str) -> Result<ThrowOutcome, EngineError> {
        self.ensure_in_progress()?;

        match EntryCommand::parse(input) {
            EntryCommand::Quit => self.abort(),
            EntryCommand::Modify => Ok(ThrowOutcome::ModifyRequested),
            EntryCommand::Throw(token) => match parse_throw(token, self.state.pins_remaining) {
                Ok(pins) => self.record_pins(pins),
                Err(error) => Ok(ThrowOutcome::Invalid(error)),
            },
        }
    }

    /// Records a numeric throw, rejecting it if more pins than are standing.
    pub fn record_pins(&mut self, pins: u8) -> Result<ThrowOutcome, EngineError> {
        self.ensure_in_progress()?;

        if pins > self.state.pins_remaining {
            return Ok(ThrowOutcome::Invalid(ThrowParseError::TooManyPins {
                value: u32::from(pins),
                pins_remaining: self.state.pins_remaining,
            }));
        }

        let EntryState { frame, throw, .. } = self.state;
        self.log.record(frame, throw, pins);

        match transition::advance(&mut self.state, pins) {
            Step::Continue => Ok(ThrowOutcome::Accepted(self.state)),
            Step::FrameDone => Ok(ThrowOutcome::FrameComplete {
                frame,
                state: self.state,
            }),
            Step::GameDone => {
                self.status = GameStatus::Completed;
                Ok(ThrowOutcome::GameComplete(self.log))
            }
        }
    }

    /// Abandons the game.
    pub fn abort(&mut self) -> Result<ThrowOutcome, EngineError> {
        self.ensure_in_progress()?;
        self.status = GameStatus::Aborted;
        Ok(ThrowOutcome::Aborted)
    }

    /// Replaces a previously completed frame.
    ///
    /// Entry state is never changed; a rejected correction leaves the log
    /// untouched.
    pub fn correct_frame(&mut self, correction: &FrameCorrection) -> Result<(), CorrectionError> {
        if self.status == GameStatus::Aborted {
            return Err(CorrectionError::GameAborted);
        }
        correction.verify()?;
        if correction.frame > self.completed_frames() {
            return Err(CorrectionError::FrameNotCompleted {
                frame: correction.frame,
                current: self.state.frame,
            });
        }
        correction.apply_to(&mut self.log)?;
        Ok(())
    }

    fn ensure_in_progress(&self) -> Result<(), EngineError> {
        if self.is_finished() {
            Err(EngineError::GameOver {
                status: self.status,
            })
        } else {
            Ok(())
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::start()
    }
}

//! Event types emitted while a game is being entered.

use bowling_core::{CorrectionError, EntryState, Scorecard, ThrowLog, ThrowParseError};

use crate::repository::{GameKey, GameRecord};

/// Coarse grouping of session events, for observers that only care about
/// part of the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Topic {
    /// Throws accepted or rejected.
    Entry,
    /// Frame corrections.
    Correction,
    /// Game start, frame completion, completion, and abort.
    Lifecycle,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    GameStarted {
        key: GameKey,
    },
    ThrowAccepted {
        state: EntryState,
        scorecard: Scorecard,
    },
    ThrowRejected {
        input: String,
        error: ThrowParseError,
    },
    /// A frame finished and the log was saved.
    FrameCompleted {
        frame: u8,
        throws: ThrowLog,
        scorecard: Scorecard,
    },
    CorrectionApplied {
        frame: u8,
        throws: ThrowLog,
        scorecard: Scorecard,
    },
    CorrectionRejected {
        input: String,
        error: CorrectionError,
    },
    GameCompleted {
        record: GameRecord,
    },
    GameAborted {
        key: GameKey,
    },
}

impl SessionEvent {
    pub fn topic(&self) -> Topic {
        match self {
            Self::ThrowAccepted { .. } | Self::ThrowRejected { .. } => Topic::Entry,
            Self::CorrectionApplied { .. } | Self::CorrectionRejected { .. } => {
                Topic::Correction
            }
            Self::GameStarted { .. }
            | Self::FrameCompleted { .. }
            | Self::GameCompleted { .. }
            | Self::GameAborted { .. } => Topic::Lifecycle,
        }
    }

    /// Scorecard carried by the event, if any.
    pub fn scorecard(&self) -> Option<Scorecard> {
        match self {
            Self::ThrowAccepted { scorecard, .. }
            | Self::FrameCompleted { scorecard, .. }
            | Self::CorrectionApplied { scorecard, .. } => Some(*scorecard),
            Self::GameCompleted { record } => Some(record.scorecard()),
            _ => None,
        }
    }
}

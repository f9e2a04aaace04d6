//! Error types for the entry state machine.

use crate::error::{ErrorSeverity, GameError};
use crate::rules::FrameError;

use super::GameStatus;

/// Errors surfaced while submitting input to the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    #[error("game is no longer accepting throws ({status})")]
    GameOver { status: GameStatus },
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::GameOver { .. } => "GAME_OVER",
        }
    }
}

/// Errors surfaced while correcting a previously entered frame.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CorrectionError {
    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error("frame {frame} has not been completed yet (currently on frame {current})")]
    FrameNotCompleted { frame: u8, current: u8 },

    #[error("game was aborted")]
    GameAborted,
}

impl GameError for CorrectionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Frame(error) => error.severity(),
            Self::FrameNotCompleted { .. } => ErrorSeverity::Validation,
            Self::GameAborted => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Frame(error) => error.error_code(),
            Self::FrameNotCompleted { .. } => "FRAME_NOT_COMPLETED",
            Self::GameAborted => "GAME_ABORTED",
        }
    }
}

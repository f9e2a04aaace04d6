//! Rule violation errors.

use crate::error::{ErrorSeverity, GameError};

/// A token that does not map to a legal pin count for the current rack.
///
/// Recovered locally by re-prompting for the same throw.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThrowParseError {
    /// `x` entered when pins have already fallen on this rack.
    #[error("a strike needs a full rack ({pins_remaining} pins standing)")]
    StrikeUnavailable { pins_remaining: u8 },

    /// `/` entered on the first throw at a fresh rack.
    #[error("cannot record a spare on a fresh rack")]
    SpareOnFreshRack,

    /// `/` entered when no pins are standing.
    #[error("no pins left to spare")]
    NoPinsForSpare,

    /// The token is neither a mark nor a number.
    #[error("'{token}' is not a pin count")]
    NotANumber { token: String },

    /// More pins than are standing.
    #[error("{value} pins entered but only {pins_remaining} standing")]
    TooManyPins { value: u32, pins_remaining: u8 },
}

impl GameError for ThrowParseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::StrikeUnavailable { .. } => "STRIKE_UNAVAILABLE",
            Self::SpareOnFreshRack => "SPARE_ON_FRESH_RACK",
            Self::NoPinsForSpare => "NO_PINS_FOR_SPARE",
            Self::NotANumber { .. } => "NOT_A_NUMBER",
            Self::TooManyPins { .. } => "TOO_MANY_PINS",
        }
    }
}

/// A fully specified frame that breaks the rules.
///
/// Reported as a rejected edit; the stored frame is left unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameError {
    #[error("frame {frame} does not exist")]
    InvalidFrameNumber { frame: u8 },

    #[error("frame {frame} takes {expected} values, got {actual}")]
    WrongThrowCount {
        frame: u8,
        expected: usize,
        actual: usize,
    },

    #[error("frame {frame} is missing throw {throw}")]
    MissingThrow { frame: u8, throw: u8 },

    #[error("frame {frame} throw {throw}: {value} pins with only {pins_remaining} standing")]
    TooManyPins {
        frame: u8,
        throw: u8,
        value: u8,
        pins_remaining: u8,
    },

    #[error("frame {frame} has a third throw without a strike or spare")]
    ThirdThrowWithoutMark { frame: u8 },

    #[error("'{input}' is not a frame correction")]
    MalformedCorrection { input: String },
}

impl GameError for FrameError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidFrameNumber { .. } => "INVALID_FRAME_NUMBER",
            Self::WrongThrowCount { .. } => "WRONG_THROW_COUNT",
            Self::MissingThrow { .. } => "MISSING_THROW",
            Self::TooManyPins { .. } => "TOO_MANY_PINS",
            Self::ThirdThrowWithoutMark { .. } => "THIRD_THROW_WITHOUT_MARK",
            Self::MalformedCorrection { .. } => "MALFORMED_CORRECTION",
        }
    }
}

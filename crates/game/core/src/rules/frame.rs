use crate::config::GameConfig;
use crate::state::ThrowLog;

use super::error::FrameError;

/// A replacement for one previously recorded frame.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameCorrection {
    pub frame: u8,
    pub throws: Vec<Option<u8>>,
}

impl FrameCorrection {
    pub fn new(frame: u8, throws: impl Into<Vec<Option<u8>>>) -> Self {
        Self {
            frame,
            throws: throws.into(),
        }
    }

    pub fn verify(&self) -> Result<(), FrameError> {
        verify_frame(self.frame, &self.throws)
    }

    /// Verifies the correction and writes it into `log`.
    ///
    /// On rejection `log` is left untouched.
    pub fn apply_to(&self, log: &mut ThrowLog) -> Result<(), FrameError> {
        self.verify()?;
        if log.replace_frame(self.frame, &self.throws) {
            Ok(())
        } else {
            Err(FrameError::InvalidFrameNumber { frame: self.frame })
        }
    }
}

/// Parses a correction line of the form `<frame> <t1> <t2> [<t3>]`.
///
/// Throw tokens that are not integers become absent, which
/// [`verify_frame`] then rejects. Only the frame token must parse here.
pub fn parse_correction(line: &str) -> Result<FrameCorrection, FrameError> {
    let mut tokens = line.split_whitespace();
    let frame = tokens
        .next()
        .and_then(|token| token.parse::<u8>().ok())
        .ok_or_else(|| FrameError::MalformedCorrection {
            input: line.trim().to_string(),
        })?;
    let throws = tokens.map(|token| token.parse::<u8>().ok()).collect();

    Ok(FrameCorrection { frame, throws })
}

/// Checks a fully specified frame against the rules.
///
/// Frames 1-9 take exactly two values (a strike is written `10 0`); the last
/// frame takes exactly three (an open last frame ends in `0`). Every value
/// must be present and must not exceed the pins standing when it was thrown:
/// after a strike or a spare in the last frame the next throw faces a fresh
/// rack.
pub fn verify_frame(frame: u8, throws: &[Option<u8>]) -> Result<(), FrameError> {
    let expected = GameConfig::slots_for(frame).ok_or(FrameError::InvalidFrameNumber { frame })?;
    if throws.len() != expected {
        return Err(FrameError::WrongThrowCount {
            frame,
            expected,
            actual: throws.len(),
        });
    }

    let mut values = [0u8; GameConfig::LAST_FRAME_THROWS];
    for (index, slot) in throws.iter().enumerate() {
        values[index] = slot.ok_or(FrameError::MissingThrow {
            frame,
            throw: index as u8 + 1,
        })?;
    }

    let check = |throw: u8, value: u8, standing: u8| {
        if value > standing {
            Err(FrameError::TooManyPins {
                frame,
                throw,
                value,
                pins_remaining: standing,
            })
        } else {
            Ok(())
        }
    };

    let pins = GameConfig::PINS;
    let [first, second, third] = values;
    check(1, first, pins)?;

    if frame < GameConfig::LAST_FRAME {
        return check(2, second, pins - first);
    }

    if first == pins {
        check(2, second, pins)?;
        let standing = if second == pins { pins } else { pins - second };
        return check(3, third, standing);
    }

    check(2, second, pins - first)?;
    if first + second == pins {
        check(3, third, pins)
    } else if third != 0 {
        Err(FrameError::ThirdThrowWithoutMark { frame })
    } else {
        Ok(())
    }
}

/// Boolean form of [`verify_frame`].
pub fn is_valid_frame(frame: u8, throws: &[Option<u8>]) -> bool {
    verify_frame(frame, throws).is_ok()
}

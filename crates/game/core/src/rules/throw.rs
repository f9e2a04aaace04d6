use crate::config::GameConfig;

use super::error::ThrowParseError;

/// Converts a raw user token into a pin count.
///
/// | token   | accepted when              | yields           |
/// |---------|----------------------------|------------------|
/// | `x`     | the rack is full           | 10               |
/// | `/`     | some pins already fell     | `pins_remaining` |
/// | `-`     | always                     | 0                |
/// | integer | `0 <= v <= pins_remaining` | `v`              |
///
/// Tokens are trimmed and `x` is case-insensitive. Pure function.
pub fn parse_throw(token: &str, pins_remaining: u8) -> Result<u8, ThrowParseError> {
    let pins_remaining = pins_remaining.min(GameConfig::PINS);
    let token = token.trim();

    match token {
        "x" | "X" if pins_remaining == GameConfig::PINS => Ok(GameConfig::PINS),
        "x" | "X" => Err(ThrowParseError::StrikeUnavailable { pins_remaining }),
        "/" if pins_remaining == GameConfig::PINS => Err(ThrowParseError::SpareOnFreshRack),
        "/" if pins_remaining == 0 => Err(ThrowParseError::NoPinsForSpare),
        "/" => Ok(pins_remaining),
        "-" => Ok(0),
        _ => {
            let value: u32 = token
                .parse()
                .map_err(|_| ThrowParseError::NotANumber {
                    token: token.to_string(),
                })?;
            if value <= u32::from(pins_remaining) {
                // value fits: bounded by pins_remaining
                Ok(value as u8)
            } else {
                Err(ThrowParseError::TooManyPins {
                    value,
                    pins_remaining,
                })
            }
        }
    }
}
